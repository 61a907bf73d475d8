#![no_main]
use libfuzzer_sys::fuzz_target;

use embedded_hal::i2c::SevenBitAddress;
use embedded_hal_fuzz::i2c::ArbitraryI2c;
use lsm9ds1::{GyroAccelConfig, Lsm9ds1, MagnetConfig};

fuzz_target!(|input: (ArbitraryI2c<SevenBitAddress>, [u8; 5], [f32; 3])| {
    let (i2c, indices, offset) = input;

    let Ok(mut imu) = Lsm9ds1::new(i2c) else {
        return;
    };

    if let Ok(config) = GyroAccelConfig::try_from_indices(indices[0], indices[1], indices[2]) {
        let _ = imu.configure_gyro_accel(&config);
    }
    if let Ok(config) = MagnetConfig::try_from_indices(indices[3], indices[4]) {
        let _ = imu.configure_magnetometer(&config);
    }

    // Offsets beyond the i16 range, NaN and infinities must not panic
    let _ = imu.set_mag_offset(offset.into());
    let _ = imu.mag_offset();

    let _ = imu.gyro_data();
    let _ = imu.accel_data();
    let _ = imu.mag_data();
    let _ = imu.temperature();
    let _ = imu.status();
});
