use linux_embedded_hal::I2cdev;
use lsm9ds1::{
    mint, AccelScale, GyroAccelConfig, GyroAccelRate, GyroScale, Lsm9ds1, MagnetConfig,
    MagnetRate, MagnetScale,
};

fn main() {
    let dev = I2cdev::new("/dev/i2c-1").unwrap();
    let mut imu = Lsm9ds1::new(dev).expect("An error occurred while building the IMU");

    imu.configure_gyro_accel(&GyroAccelConfig::new(
        GyroAccelRate::Hz119,
        GyroScale::Dps500,
        AccelScale::G4,
    ))
    .expect("An error occurred while configuring gyroscope and accelerometer");

    imu.configure_magnetometer(&MagnetConfig::new(MagnetRate::Hz20, MagnetScale::Gauss8))
        .expect("An error occurred while configuring the magnetometer");

    // Hard-iron offset measured beforehand, subtracted by the magnetometer itself
    imu.set_mag_offset(mint::Vector3::from([0.12, -0.05, 0.31]))
        .unwrap();

    println!("Temperature: {:.1} °C", imu.temperature().unwrap());

    loop {
        match imu.gyro_data() {
            Ok(g) => println!("Gyro (deg/s): {:?}", g),
            Err(e) => eprintln!("{:?}", e),
        }

        match imu.accel_data() {
            Ok(a) => println!("Accel (g): {:?}", a),
            Err(e) => eprintln!("{:?}", e),
        }

        match imu.mag_data() {
            Ok(m) => println!("Magnet (gauss): {:?}", m),
            Err(e) => eprintln!("{:?}", e),
        }

        std::thread::sleep(std::time::Duration::from_millis(500));
    }
}
