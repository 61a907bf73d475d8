//! Identity check at construction

mod common;

use common::{MockI2c, Op, AG, MAG, WHO_AM_I};
use lsm9ds1::{Addresses, Error, IdentityError, Lsm9ds1, LSM9DS1_AG_ID, LSM9DS1_M_ID};

#[test]
fn reads_both_identities_before_configuring() {
    let mock = MockI2c::new();

    let imu = Lsm9ds1::new(mock.clone());
    assert!(imu.is_ok());

    let ops = mock.ops();
    assert_eq!(
        ops[0],
        Op::Read {
            addr: AG,
            reg: WHO_AM_I,
            len: 1
        }
    );
    assert_eq!(
        ops[1],
        Op::Read {
            addr: MAG,
            reg: WHO_AM_I,
            len: 1
        }
    );
    assert!(ops[2..].iter().all(|op| matches!(op, Op::Write { .. })));
}

#[test]
fn wrong_gyro_identity_fails_without_writes() {
    let mock = MockI2c::with_ids(0x00, LSM9DS1_M_ID);

    match Lsm9ds1::new(mock.clone()) {
        Err(Error::InvalidIdentity(e)) => assert_eq!(
            e,
            IdentityError {
                expected_gyro: LSM9DS1_AG_ID,
                expected_magnet: LSM9DS1_M_ID,
                got_gyro: 0x00,
                got_magnet: LSM9DS1_M_ID,
                addresses: Addresses::default(),
            }
        ),
        Err(e) => panic!("unexpected error: {:?}", e),
        Ok(_) => panic!("construction should fail"),
    }

    assert!(mock.writes().is_empty());
}

#[test]
fn wrong_magnet_identity_fails_without_writes() {
    let mock = MockI2c::with_ids(LSM9DS1_AG_ID, 0x40);

    match Lsm9ds1::new(mock.clone()) {
        Err(Error::InvalidIdentity(e)) => {
            assert_eq!(e.got_gyro, LSM9DS1_AG_ID);
            assert_eq!(e.got_magnet, 0x40);
        }
        Err(e) => panic!("unexpected error: {:?}", e),
        Ok(_) => panic!("construction should fail"),
    }

    assert!(mock.writes().is_empty());
}

#[test]
fn identities_swapped_between_sub_devices_fail() {
    let mock = MockI2c::with_ids(LSM9DS1_M_ID, LSM9DS1_AG_ID);

    assert!(matches!(
        Lsm9ds1::new(mock.clone()),
        Err(Error::InvalidIdentity(_))
    ));
    assert!(mock.writes().is_empty());
}

#[test]
fn custom_addresses_are_used() {
    let addresses = Addresses::alternative();
    let mock = MockI2c::at(addresses.gyro, LSM9DS1_AG_ID, addresses.magnet, LSM9DS1_M_ID);

    let imu = Lsm9ds1::with_addresses(mock.clone(), addresses).unwrap();
    assert_eq!(imu.addresses(), addresses);
    assert_eq!(addresses.gyro, 0x6B);
    assert_eq!(addresses.magnet, 0x1E);

    for op in mock.ops() {
        let addr = match op {
            Op::Write { addr, .. } | Op::Read { addr, .. } => addr,
        };
        assert!(addr == addresses.gyro || addr == addresses.magnet);
    }
}

#[test]
fn absent_device_reports_identity_at_requested_addresses() {
    // Nothing answers at the default addresses
    let mock = MockI2c::at(0x6B, LSM9DS1_AG_ID, 0x1E, LSM9DS1_M_ID);

    match Lsm9ds1::new(mock.clone()) {
        Err(Error::InvalidIdentity(e)) => {
            assert_eq!(e.addresses, Addresses::default());
            assert_eq!(e.got_gyro, 0x00);
            assert_eq!(e.got_magnet, 0x00);
        }
        Err(e) => panic!("unexpected error: {:?}", e),
        Ok(_) => panic!("construction should fail"),
    }
}

#[test]
fn bus_failure_during_identity_check_propagates() {
    let mock = MockI2c::new();
    mock.fail_reads(true);

    assert!(matches!(Lsm9ds1::new(mock.clone()), Err(Error::I2c(_))));
    assert!(mock.writes().is_empty());
}

#[test]
fn id_getters() {
    let mock = MockI2c::new();
    let mut imu = Lsm9ds1::new(mock).unwrap();

    assert_eq!(imu.id_gyro().unwrap(), 0x68);
    assert_eq!(imu.id_magnet().unwrap(), 0x3D);
    assert!(imu.verify_identity().is_ok());
}
