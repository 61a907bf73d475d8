#![doc(html_root_url = "https://docs.rs/lsm9ds1/0.1.0")]
#![cfg_attr(not(feature = "std"), no_std)]

//! ST LSM9DS1 9-axis IMU sensor driver.
//!
//! The package holds two I2C targets: the accelerometer/gyroscope and the
//! magnetometer. Every register access carries the address of the target it
//! is meant for, so the pair of "select target, touch register" is a single
//! bus transaction.
//!
//! Datasheet: https://www.st.com/resource/en/datasheet/lsm9ds1.pdf
use embedded_hal::i2c::{I2c, SevenBitAddress};

#[cfg(not(feature = "defmt-03"))]
use bitflags::bitflags;
#[cfg(feature = "defmt-03")]
use defmt::bitflags;

use byteorder::{ByteOrder, LittleEndian};
pub use mint;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod config;
mod regs;
#[cfg(feature = "std")]
mod std;

pub use config::{
    AccelScale, ConfigField, Error as ConfigError, GyroAccelConfig, GyroAccelRate, GyroScale,
    MagnetConfig, MagnetRate, MagnetScale,
};
pub use regs::{
    LSM9DS1_AG_ALTERNATE_ADDR, LSM9DS1_AG_DEFAULT_ADDR, LSM9DS1_AG_ID, LSM9DS1_M_ALTERNATE_ADDR,
    LSM9DS1_M_DEFAULT_ADDR, LSM9DS1_M_ID,
};

use regs::{AgRegister, MagRegister};

/// Longest register block written in one transaction.
const MAX_BURST_LEN: usize = 6;

/// Temperature output is 16 LSB/°C around 25 °C.
const TEMP_LSB_PER_DEG: f32 = 16.0;
const TEMP_OFFSET_DEG: f32 = 25.0;

/// All possible errors in this crate
#[derive(Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Error<E> {
    /// I2C bus error
    I2c(E),

    /// One of the sub-devices answered with an unexpected `WHO_AM_I`
    InvalidIdentity(IdentityError),

    /// Configuration index outside its domain
    Config(ConfigError),
}

impl<E> From<ConfigError> for Error<E> {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

/// `WHO_AM_I` mismatch details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct IdentityError {
    pub expected_gyro: u8,
    pub expected_magnet: u8,
    pub got_gyro: u8,
    pub got_magnet: u8,
    pub addresses: Addresses,
}

/// I2C addresses of the two sub-devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Addresses {
    /// Accelerometer/gyroscope
    pub gyro: u8,
    /// Magnetometer
    pub magnet: u8,
}

impl Default for Addresses {
    fn default() -> Self {
        Addresses {
            gyro: regs::LSM9DS1_AG_DEFAULT_ADDR,
            magnet: regs::LSM9DS1_M_DEFAULT_ADDR,
        }
    }
}

impl Addresses {
    /// Addresses with both SDO pins pulled high.
    pub fn alternative() -> Self {
        Addresses {
            gyro: regs::LSM9DS1_AG_ALTERNATE_ADDR,
            magnet: regs::LSM9DS1_M_ALTERNATE_ADDR,
        }
    }
}

/// Scale factors currently used to convert raw counts, in counts per unit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct ScaleFactors {
    /// counts per deg/s
    pub gyro: f32,
    /// counts per g
    pub accel: f32,
    /// counts per gauss
    pub magnet: f32,
}

pub struct Lsm9ds1<I> {
    i2c: I,
    addresses: Addresses,
    scale_gyro: f32,
    scale_accel: f32,
    scale_magnet: f32,
}

impl<I, E> Lsm9ds1<I>
where
    I: I2c<SevenBitAddress, Error = E>,
{
    /// Creates the driver using the default addresses.
    ///
    /// See [`Lsm9ds1::with_addresses`].
    pub fn new(i2c: I) -> Result<Self, Error<E>> {
        Self::with_addresses(i2c, Addresses::default())
    }

    /// Creates the driver for sub-devices at `addresses`.
    ///
    /// Side-effects:
    /// - Checks `WHO_AM_I` of both sub-devices, nothing is written if either is wrong
    /// - Applies `GyroAccelConfig::default()` (952 Hz, 245 deg/s, 2 g)
    /// - Applies `MagnetConfig::default()` (80 Hz, 4 gauss)
    ///
    /// The bus is moved into the driver; pass `&mut i2c` to keep it.
    ///
    /// # Usage Example
    ///
    /// ```rust
    /// // use your_chip_hal::I2c; // <- import your chip's I2c
    /// use lsm9ds1::Lsm9ds1;
    /// #
    /// # // All of this is needed for example to work:
    /// # use lsm9ds1::{LSM9DS1_AG_DEFAULT_ADDR, LSM9DS1_AG_ID, LSM9DS1_M_ID};
    /// # use embedded_hal::i2c::{I2c as I2cTrait, Operation, Error, ErrorType, ErrorKind};
    /// # struct I2c {}
    /// # impl I2c { pub fn new() -> Self { I2c { } }}
    /// # #[derive(Debug)]
    /// # struct DummyError {}
    /// # impl Error for DummyError { fn kind(&self) -> ErrorKind { ErrorKind::Other } }
    /// # impl ErrorType for I2c { type Error = DummyError; }
    /// # // Identity reads are Write/Read pairs; answer them per target address.
    /// # impl I2cTrait for I2c { fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> { match operations.get_mut(1) { Some(Operation::Read(read)) => { read[0] = if address == LSM9DS1_AG_DEFAULT_ADDR { LSM9DS1_AG_ID } else { LSM9DS1_M_ID }; }, _ => {} }; Ok(()) } }
    /// #
    /// # // Actual example:
    /// let mut i2c = I2c::new(/* ... */);
    /// let mut imu = Lsm9ds1::new(&mut i2c)?;
    /// let gyro = imu.gyro_data()?;
    /// # Result::<(), lsm9ds1::Error<DummyError>>::Ok(())
    /// ```
    pub fn with_addresses(i2c: I, addresses: Addresses) -> Result<Self, Error<E>> {
        let gyro_accel = GyroAccelConfig::default();
        let magnet = MagnetConfig::default();

        let mut imu = Lsm9ds1 {
            i2c,
            addresses,
            scale_gyro: gyro_accel.gyro_scale().scale_factor(),
            scale_accel: gyro_accel.accel_scale().scale_factor(),
            scale_magnet: magnet.scale().scale_factor(),
        };

        imu.verify_identity()?;
        imu.configure_gyro_accel(&gyro_accel)?;
        imu.configure_magnetometer(&magnet)?;

        Ok(imu)
    }

    /// Destroy driver instance, return I2C bus instance.
    pub fn destroy(self) -> I {
        self.i2c
    }

    pub fn addresses(&self) -> Addresses {
        self.addresses
    }

    /// Checks that both sub-devices answer with their `WHO_AM_I` values.
    ///
    /// Both identities are read before comparing, so the error carries both.
    pub fn verify_identity(&mut self) -> Result<(), Error<E>> {
        let got_gyro = self.id_gyro()?;
        let got_magnet = self.id_magnet()?;

        if got_gyro != regs::LSM9DS1_AG_ID || got_magnet != regs::LSM9DS1_M_ID {
            #[cfg(feature = "defmt-03")]
            defmt::warn!(
                "LSM9DS1 identity mismatch: gyro {=u8:#x}, magnet {=u8:#x}",
                got_gyro,
                got_magnet
            );

            return Err(Error::InvalidIdentity(IdentityError {
                expected_gyro: regs::LSM9DS1_AG_ID,
                expected_magnet: regs::LSM9DS1_M_ID,
                got_gyro,
                got_magnet,
                addresses: self.addresses,
            }));
        }

        Ok(())
    }

    /// Returns the accelerometer/gyroscope `WHO_AM_I` byte.
    pub fn id_gyro(&mut self) -> Result<u8, Error<E>> {
        self.read_u8(self.addresses.gyro, AgRegister::WhoAmI.addr())
            .map_err(Error::I2c)
    }

    /// Returns the magnetometer `WHO_AM_I` byte.
    pub fn id_magnet(&mut self) -> Result<u8, Error<E>> {
        self.read_u8(self.addresses.magnet, MagRegister::WhoAmI.addr())
            .map_err(Error::I2c)
    }

    /// Configures sample rate and full-scale ranges of gyroscope and accelerometer.
    ///
    /// Enables all axes and register auto-increment, and puts the FIFO in
    /// continuous (overwrite oldest) mode. Readings taken afterwards are
    /// scaled with the new ranges.
    pub fn configure_gyro_accel(&mut self, config: &GyroAccelConfig) -> Result<(), Error<E>> {
        let addr = self.addresses.gyro;

        self.write_bytes(addr, AgRegister::CtrlReg1G.addr(), &config.gyro_ctrl_regs())
            .map_err(Error::I2c)?;
        self.write_bytes(addr, AgRegister::CtrlReg4.addr(), &config.accel_ctrl_regs())
            .map_err(Error::I2c)?;

        // FIFO mode must go through bypass before switching to continuous
        self.write_u8(addr, AgRegister::FifoCtrl.addr(), regs::FIFO_CTRL_BYPASS)
            .map_err(Error::I2c)?;
        self.write_u8(addr, AgRegister::FifoCtrl.addr(), regs::FIFO_CTRL_CONTINUOUS)
            .map_err(Error::I2c)?;

        self.scale_gyro = config.gyro_scale().scale_factor();
        self.scale_accel = config.accel_scale().scale_factor();

        #[cfg(feature = "defmt-03")]
        defmt::debug!("LSM9DS1 gyro/accel configured: {}", config);

        Ok(())
    }

    /// Configures sample rate and full-scale range of the magnetometer.
    ///
    /// X, Y and Z run in high-performance continuous-conversion mode.
    /// The hard-iron offset registers are left untouched, so an offset set
    /// with [`Lsm9ds1::set_mag_offset`] keeps its raw value across scale changes.
    pub fn configure_magnetometer(&mut self, config: &MagnetConfig) -> Result<(), Error<E>> {
        self.write_bytes(
            self.addresses.magnet,
            MagRegister::CtrlReg1.addr(),
            &config.ctrl_regs(),
        )
        .map_err(Error::I2c)?;

        self.scale_magnet = config.scale().scale_factor();

        #[cfg(feature = "defmt-03")]
        defmt::debug!("LSM9DS1 magnetometer configured: {}", config);

        Ok(())
    }

    /// Returns the scale factors readings are currently converted with.
    pub fn scale_factors(&self) -> ScaleFactors {
        ScaleFactors {
            gyro: self.scale_gyro,
            accel: self.scale_accel,
            magnet: self.scale_magnet,
        }
    }

    /// Writes a hard-iron offset in gauss.
    ///
    /// The magnetometer subtracts it from every following measurement.
    /// Components are converted with the current magnet scale factor and
    /// truncated toward zero.
    pub fn set_mag_offset(&mut self, offset: mint::Vector3<f32>) -> Result<(), Error<E>> {
        let buf = encode_vec(to_counts(offset, self.scale_magnet));

        self.write_bytes(
            self.addresses.magnet,
            MagRegister::OffsetXRegL.addr(),
            &buf,
        )
        .map_err(Error::I2c)
    }

    /// Reads back the hard-iron offset in gauss.
    pub fn mag_offset(&mut self) -> Result<mint::Vector3<f32>, Error<E>> {
        let raw = self.read_vec_raw(self.addresses.magnet, MagRegister::OffsetXRegL.addr())?;
        Ok(scale_vec(raw, self.scale_magnet))
    }

    /// Reads a vector of sensor data from the device.
    fn read_vec_raw(&mut self, addr: u8, reg: u8) -> Result<mint::Vector3<i16>, Error<E>> {
        let mut buf: [u8; 6] = [0; 6];

        self.read_bytes(addr, reg, &mut buf).map_err(Error::I2c)?;

        Ok(decode_vec(&buf))
    }

    /// Returns raw gyroscope counts.
    pub fn gyro_data_fixed(&mut self) -> Result<mint::Vector3<i16>, Error<E>> {
        self.read_vec_raw(self.addresses.gyro, AgRegister::OutXG.addr())
    }

    /// Returns gyroscope data in deg/s.
    pub fn gyro_data(&mut self) -> Result<mint::Vector3<f32>, Error<E>> {
        let g = self.gyro_data_fixed()?;
        Ok(scale_vec(g, self.scale_gyro))
    }

    /// Returns raw accelerometer counts.
    pub fn accel_data_fixed(&mut self) -> Result<mint::Vector3<i16>, Error<E>> {
        self.read_vec_raw(self.addresses.gyro, AgRegister::OutXXl.addr())
    }

    /// Returns accelerometer data in g (9.81 m/s^2).
    pub fn accel_data(&mut self) -> Result<mint::Vector3<f32>, Error<E>> {
        let a = self.accel_data_fixed()?;
        Ok(scale_vec(a, self.scale_accel))
    }

    /// Returns raw magnetometer counts.
    pub fn mag_data_fixed(&mut self) -> Result<mint::Vector3<i16>, Error<E>> {
        self.read_vec_raw(self.addresses.magnet, MagRegister::OutXL.addr())
    }

    /// Returns magnetometer data in gauss.
    pub fn mag_data(&mut self) -> Result<mint::Vector3<f32>, Error<E>> {
        let m = self.mag_data_fixed()?;
        Ok(scale_vec(m, self.scale_magnet))
    }

    /// Returns temperature of the chip in degrees Celsius.
    pub fn temperature(&mut self) -> Result<f32, Error<E>> {
        let mut buf: [u8; 2] = [0; 2];

        self.read_bytes(self.addresses.gyro, AgRegister::OutTempL.addr(), &mut buf)
            .map_err(Error::I2c)?;

        let raw = LittleEndian::read_i16(&buf);
        Ok(TEMP_OFFSET_DEG + raw as f32 / TEMP_LSB_PER_DEG)
    }

    /// Returns accelerometer/gyroscope status flags.
    pub fn status(&mut self) -> Result<Lsm9ds1Status, Error<E>> {
        let status = self
            .read_u8(self.addresses.gyro, AgRegister::StatusReg.addr())
            .map_err(Error::I2c)?;

        Ok(Lsm9ds1Status::from_bits_truncate(status))
    }

    fn read_u8(&mut self, addr: u8, reg: u8) -> Result<u8, E> {
        let mut byte: [u8; 1] = [0; 1];

        match self.i2c.write_read(addr, &[reg], &mut byte) {
            Ok(_) => Ok(byte[0]),
            Err(e) => Err(e),
        }
    }

    fn read_bytes(&mut self, addr: u8, reg: u8, buf: &mut [u8]) -> Result<(), E> {
        self.i2c.write_read(addr, &[reg], buf)
    }

    fn write_u8(&mut self, addr: u8, reg: u8, value: u8) -> Result<(), E> {
        self.i2c.write(addr, &[reg, value])?;

        Ok(())
    }

    /// Writes consecutive registers starting at `reg` in one transaction.
    fn write_bytes(&mut self, addr: u8, reg: u8, data: &[u8]) -> Result<(), E> {
        // Combine register address and data into single buffer
        let mut buf = [0u8; 1 + MAX_BURST_LEN];
        let len = data.len().min(MAX_BURST_LEN);
        buf[0] = reg;
        buf[1..=len].copy_from_slice(&data[..len]);

        self.i2c.write(addr, &buf[..=len])
    }
}

/// Interprets a 6-byte burst as little-endian X, Y, Z.
fn decode_vec(buf: &[u8; 6]) -> mint::Vector3<i16> {
    let x = LittleEndian::read_i16(&buf[0..2]);
    let y = LittleEndian::read_i16(&buf[2..4]);
    let z = LittleEndian::read_i16(&buf[4..6]);

    mint::Vector3::from([x, y, z])
}

fn encode_vec(v: mint::Vector3<i16>) -> [u8; 6] {
    let mut buf: [u8; 6] = [0; 6];

    LittleEndian::write_i16(&mut buf[0..2], v.x);
    LittleEndian::write_i16(&mut buf[2..4], v.y);
    LittleEndian::write_i16(&mut buf[4..6], v.z);

    buf
}

/// Divides raw counts by `scale_factor` (counts per unit).
fn scale_vec(raw: mint::Vector3<i16>, scale_factor: f32) -> mint::Vector3<f32> {
    mint::Vector3::from([
        raw.x as f32 / scale_factor,
        raw.y as f32 / scale_factor,
        raw.z as f32 / scale_factor,
    ])
}

/// Inverse of `scale_vec`, truncating toward zero and saturating at the i16 limits.
fn to_counts(v: mint::Vector3<f32>, scale_factor: f32) -> mint::Vector3<i16> {
    mint::Vector3::from([
        (v.x * scale_factor) as i16,
        (v.y * scale_factor) as i16,
        (v.z * scale_factor) as i16,
    ])
}

bitflags! {
    /// Accelerometer/gyroscope STATUS_REG flags.
    #[cfg_attr(not(feature = "defmt-03"), derive(Debug, Clone, Copy, PartialEq, Eq))]
    pub struct Lsm9ds1Status: u8 {
        /// New accelerometer data available
        const XLDA = 0b0000_0001;
        /// New gyroscope data available
        const GDA = 0b0000_0010;
        /// New temperature data available
        const TDA = 0b0000_0100;
        /// Boot running
        const BOOT_STATUS = 0b0000_1000;
        /// Inactivity interrupt
        const INACT = 0b0001_0000;
        /// Gyroscope interrupt
        const IG_G = 0b0010_0000;
        /// Accelerometer interrupt
        const IG_XL = 0b0100_0000;
    }
}

impl Lsm9ds1Status {
    pub fn is_accel_data_ready(&self) -> bool {
        self.contains(Self::XLDA)
    }

    pub fn is_gyro_data_ready(&self) -> bool {
        self.contains(Self::GDA)
    }

    pub fn is_temperature_ready(&self) -> bool {
        self.contains(Self::TDA)
    }
}
