use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::regs;

/// Full-scale ranges are spread over the signed 16-bit output span.
const FULL_SCALE_COUNTS: f32 = 32768.0;

#[allow(clippy::unusual_byte_groupings)]
const ODR_MASK: u8 = 0b000_00_111;
#[allow(clippy::unusual_byte_groupings)]
const FS_MASK: u8 = 0b000_000_11;

/// Configuration field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum ConfigField {
    GyroAccelSampleRate,
    GyroScale,
    AccelScale,
    MagnetSampleRate,
    MagnetScale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Error {
    /// Index is outside the enumerated domain of `field`.
    OutOfRange { field: ConfigField, value: u8 },
}

/// Output data rate shared by gyroscope and accelerometer (ODR_G / ODR_XL).
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum GyroAccelRate {
    PowerDown = 0,
    Hz14_9 = 1,
    Hz59_5 = 2,
    Hz119 = 3,
    Hz238 = 4,
    Hz476 = 5,
    Hz952 = 6,
}

/// Gyroscope full-scale range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum GyroScale {
    Dps245 = 0,
    Dps500 = 1,
    Dps2000 = 2,
}

/// Accelerometer full-scale range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum AccelScale {
    G2 = 0,
    G4 = 1,
    G8 = 2,
    G16 = 3,
}

/// Magnetometer output data rate (DO bits of CTRL_REG1_M).
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum MagnetRate {
    Hz0_625 = 0,
    Hz1_25 = 1,
    Hz2_5 = 2,
    Hz5 = 3,
    Hz10 = 4,
    Hz20 = 5,
    Hz40 = 6,
    Hz80 = 7,
}

/// Magnetometer full-scale range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum MagnetScale {
    Gauss4 = 0,
    Gauss8 = 1,
    Gauss12 = 2,
    Gauss16 = 3,
}

impl GyroScale {
    /// Full-scale range in deg/s.
    pub fn range(self) -> f32 {
        match self {
            Self::Dps245 => 245.0,
            Self::Dps500 => 500.0,
            Self::Dps2000 => 2000.0,
        }
    }

    /// FS_G bits. 0b10 is not a valid setting on this part.
    pub fn bits(self) -> u8 {
        match self {
            Self::Dps245 => 0b00,
            Self::Dps500 => 0b01,
            Self::Dps2000 => 0b11,
        }
    }

    /// Counts per deg/s.
    pub fn scale_factor(self) -> f32 {
        FULL_SCALE_COUNTS / self.range()
    }
}

impl AccelScale {
    /// Full-scale range in g.
    pub fn range(self) -> f32 {
        match self {
            Self::G2 => 2.0,
            Self::G4 => 4.0,
            Self::G8 => 8.0,
            Self::G16 => 16.0,
        }
    }

    /// FS_XL bits. The register order is 2g, 16g, 4g, 8g.
    pub fn bits(self) -> u8 {
        match self {
            Self::G2 => 0b00,
            Self::G4 => 0b10,
            Self::G8 => 0b11,
            Self::G16 => 0b01,
        }
    }

    /// Counts per g.
    pub fn scale_factor(self) -> f32 {
        FULL_SCALE_COUNTS / self.range()
    }
}

impl MagnetScale {
    /// Full-scale range in gauss.
    pub fn range(self) -> f32 {
        ((self as u8 + 1) * 4) as f32
    }

    /// FS bits of CTRL_REG2_M.
    pub fn bits(self) -> u8 {
        self as u8 & FS_MASK
    }

    /// Counts per gauss.
    pub fn scale_factor(self) -> f32 {
        FULL_SCALE_COUNTS / self.range()
    }
}

/// Gyroscope and accelerometer configuration.
///
/// Both sensors share one sample rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GyroAccelConfig {
    sample_rate: GyroAccelRate,
    gyro_scale: GyroScale,
    accel_scale: AccelScale,
}

impl Default for GyroAccelConfig {
    fn default() -> Self {
        Self::new(GyroAccelRate::Hz952, GyroScale::Dps245, AccelScale::G2)
    }
}

impl GyroAccelConfig {
    pub const fn new(
        sample_rate: GyroAccelRate,
        gyro_scale: GyroScale,
        accel_scale: AccelScale,
    ) -> Self {
        Self {
            sample_rate,
            gyro_scale,
            accel_scale,
        }
    }

    /// Builds a configuration from raw indices.
    ///
    /// `sample_rate`: 0-6 (off, 14.9, 59.5, 119, 238, 476, 952 Hz),
    /// `gyro_scale`: 0-2 (245, 500, 2000 deg/s),
    /// `accel_scale`: 0-3 (2, 4, 8, 16 g).
    pub fn try_from_indices(
        sample_rate: u8,
        gyro_scale: u8,
        accel_scale: u8,
    ) -> Result<Self, Error> {
        let sample_rate = GyroAccelRate::from_u8(sample_rate).ok_or(Error::OutOfRange {
            field: ConfigField::GyroAccelSampleRate,
            value: sample_rate,
        })?;
        let gyro_scale = GyroScale::from_u8(gyro_scale).ok_or(Error::OutOfRange {
            field: ConfigField::GyroScale,
            value: gyro_scale,
        })?;
        let accel_scale = AccelScale::from_u8(accel_scale).ok_or(Error::OutOfRange {
            field: ConfigField::AccelScale,
            value: accel_scale,
        })?;

        Ok(Self::new(sample_rate, gyro_scale, accel_scale))
    }

    /// CTRL_REG1_G..INT_GEN_SRC_G contents.
    pub fn gyro_ctrl_regs(&self) -> [u8; 5] {
        let ctrl1 =
            ((self.sample_rate as u8 & ODR_MASK) << 5) | (self.gyro_scale.bits() << 3);
        [ctrl1, 0x00, 0x00, 0x00, 0x00]
    }

    /// CTRL_REG4..CTRL_REG9 contents.
    pub fn accel_ctrl_regs(&self) -> [u8; 6] {
        let ctrl6 =
            ((self.sample_rate as u8 & ODR_MASK) << 5) | (self.accel_scale.bits() << 3);
        [
            regs::CTRL_REG4_GYRO_AXES_EN,
            regs::CTRL_REG5_XL_AXES_EN,
            ctrl6,
            0x00,
            regs::CTRL_REG8_IF_ADD_INC,
            regs::CTRL_REG9_FIFO_EN,
        ]
    }

    pub fn sample_rate(&self) -> GyroAccelRate {
        self.sample_rate
    }

    pub fn gyro_scale(&self) -> GyroScale {
        self.gyro_scale
    }

    pub fn accel_scale(&self) -> AccelScale {
        self.accel_scale
    }

    pub fn set_sample_rate(&mut self, sample_rate: GyroAccelRate) {
        self.sample_rate = sample_rate;
    }

    pub fn set_gyro_scale(&mut self, gyro_scale: GyroScale) {
        self.gyro_scale = gyro_scale;
    }

    pub fn set_accel_scale(&mut self, accel_scale: AccelScale) {
        self.accel_scale = accel_scale;
    }
}

/// Magnetometer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MagnetConfig {
    sample_rate: MagnetRate,
    scale: MagnetScale,
}

impl Default for MagnetConfig {
    fn default() -> Self {
        Self::new(MagnetRate::Hz80, MagnetScale::Gauss4)
    }
}

impl MagnetConfig {
    pub const fn new(sample_rate: MagnetRate, scale: MagnetScale) -> Self {
        Self { sample_rate, scale }
    }

    /// Builds a configuration from raw indices.
    ///
    /// `sample_rate`: 0-7 (0.625, 1.25, 2.5, 5, 10, 20, 40, 80 Hz),
    /// `scale`: 0-3 (4, 8, 12, 16 gauss).
    pub fn try_from_indices(sample_rate: u8, scale: u8) -> Result<Self, Error> {
        let sample_rate = MagnetRate::from_u8(sample_rate).ok_or(Error::OutOfRange {
            field: ConfigField::MagnetSampleRate,
            value: sample_rate,
        })?;
        let scale = MagnetScale::from_u8(scale).ok_or(Error::OutOfRange {
            field: ConfigField::MagnetScale,
            value: scale,
        })?;

        Ok(Self::new(sample_rate, scale))
    }

    /// CTRL_REG1_M..CTRL_REG5_M contents.
    pub fn ctrl_regs(&self) -> [u8; 5] {
        [
            regs::CTRL_REG1_M_XY_HIGH_PERF | ((self.sample_rate as u8 & ODR_MASK) << 2),
            self.scale.bits() << 5,
            regs::CTRL_REG3_M_CONTINUOUS,
            regs::CTRL_REG4_M_Z_HIGH_PERF,
            regs::CTRL_REG5_M_DEFAULT,
        ]
    }

    pub fn sample_rate(&self) -> MagnetRate {
        self.sample_rate
    }

    pub fn scale(&self) -> MagnetScale {
        self.scale
    }

    pub fn set_sample_rate(&mut self, sample_rate: MagnetRate) {
        self.sample_rate = sample_rate;
    }

    pub fn set_scale(&mut self, scale: MagnetScale) {
        self.scale = scale;
    }
}
