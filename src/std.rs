use crate::{ConfigError, Error, IdentityError};
use std::{error, fmt};

impl<E: core::fmt::Debug> error::Error for Error<E> {}

impl<E: core::fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C error: {:?}", e),
            Error::InvalidIdentity(e) => write!(f, "{}", e),
            Error::Config(e) => write!(f, "{}", e),
        }
    }
}

impl error::Error for IdentityError {}

impl fmt::Display for IdentityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid LSM9DS1 device at {:#04x}/{:#04x}: WHO_AM_I {:#04x}/{:#04x}, expected {:#04x}/{:#04x}",
            self.addresses.gyro,
            self.addresses.magnet,
            self.got_gyro,
            self.got_magnet,
            self.expected_gyro,
            self.expected_magnet,
        )
    }
}

impl error::Error for ConfigError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::OutOfRange { field, value } => {
                write!(f, "{:?} index {} is out of range", field, value)
            }
        }
    }
}
