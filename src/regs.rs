/// Default I2C address of the accelerometer/gyroscope (SDO_A/G pulled low).
pub const LSM9DS1_AG_DEFAULT_ADDR: u8 = 0x6A;
/// I2C address of the accelerometer/gyroscope with SDO_A/G pulled high.
pub const LSM9DS1_AG_ALTERNATE_ADDR: u8 = 0x6B;
/// Default I2C address of the magnetometer (SDO_M pulled low).
pub const LSM9DS1_M_DEFAULT_ADDR: u8 = 0x1C;
/// I2C address of the magnetometer with SDO_M pulled high.
pub const LSM9DS1_M_ALTERNATE_ADDR: u8 = 0x1E;

/// `WHO_AM_I` value of the accelerometer/gyroscope (`b'h'`).
pub const LSM9DS1_AG_ID: u8 = 0x68;
/// `WHO_AM_I` value of the magnetometer (`b'='`).
pub const LSM9DS1_M_ID: u8 = 0x3D;

/// Accelerometer/gyroscope registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum AgRegister {
    WhoAmI = 0x0F,
    /// CTRL_REG1_G..CTRL_REG3_G, ORIENT_CFG_G, INT_GEN_SRC_G
    CtrlReg1G = 0x10,
    /// Temperature, little-endian i16
    OutTempL = 0x15,
    /// Gyroscope X/Y/Z, little-endian i16 each
    OutXG = 0x18,
    /// CTRL_REG4..CTRL_REG9
    CtrlReg4 = 0x1E,
    StatusReg = 0x27,
    /// Accelerometer X/Y/Z, little-endian i16 each
    OutXXl = 0x28,
    FifoCtrl = 0x2E,
}

/// Magnetometer registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum MagRegister {
    /// Hard-iron offset X/Y/Z, little-endian i16 each
    OffsetXRegL = 0x05,
    WhoAmI = 0x0F,
    /// CTRL_REG1_M..CTRL_REG5_M
    CtrlReg1 = 0x20,
    /// Magnetometer X/Y/Z, little-endian i16 each
    OutXL = 0x28,
}

impl AgRegister {
    #[inline(always)]
    pub(crate) const fn addr(self) -> u8 {
        self as u8
    }
}

impl MagRegister {
    #[inline(always)]
    pub(crate) const fn addr(self) -> u8 {
        self as u8
    }
}

/// CTRL_REG4: Zen_G, Yen_G, Xen_G.
pub(crate) const CTRL_REG4_GYRO_AXES_EN: u8 = 0x38;
/// CTRL_REG5_XL: Zen_XL, Yen_XL, Xen_XL, no decimation.
pub(crate) const CTRL_REG5_XL_AXES_EN: u8 = 0x38;
/// CTRL_REG8: IF_ADD_INC.
pub(crate) const CTRL_REG8_IF_ADD_INC: u8 = 0x04;
/// CTRL_REG9: FIFO_EN.
pub(crate) const CTRL_REG9_FIFO_EN: u8 = 0x02;

pub(crate) const FIFO_CTRL_BYPASS: u8 = 0x00;
/// FMODE = 0b110, continuous mode overwriting the oldest sample.
pub(crate) const FIFO_CTRL_CONTINUOUS: u8 = 0xC0;

/// CTRL_REG1_M: OM = high-performance for X and Y.
pub(crate) const CTRL_REG1_M_XY_HIGH_PERF: u8 = 0x40;
/// CTRL_REG3_M: continuous-conversion, I2C enabled, no low-power.
pub(crate) const CTRL_REG3_M_CONTINUOUS: u8 = 0x00;
/// CTRL_REG4_M: OMZ = high-performance for Z.
pub(crate) const CTRL_REG4_M_Z_HIGH_PERF: u8 = 0x08;
/// CTRL_REG5_M: no fast read, continuous block update.
pub(crate) const CTRL_REG5_M_DEFAULT: u8 = 0x00;
