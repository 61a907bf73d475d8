//! Recording I2C mock shared by the integration tests

#![allow(dead_code)]

use embedded_hal::i2c::{self, ErrorKind, ErrorType, Operation};
use lsm9ds1::{LSM9DS1_AG_DEFAULT_ADDR, LSM9DS1_AG_ID, LSM9DS1_M_DEFAULT_ADDR, LSM9DS1_M_ID};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub const AG: u8 = LSM9DS1_AG_DEFAULT_ADDR;
pub const MAG: u8 = LSM9DS1_M_DEFAULT_ADDR;

pub const WHO_AM_I: u8 = 0x0F;
pub const CTRL_REG1_G: u8 = 0x10;
pub const OUT_TEMP_L: u8 = 0x15;
pub const OUT_X_G: u8 = 0x18;
pub const CTRL_REG4: u8 = 0x1E;
pub const STATUS_REG: u8 = 0x27;
pub const OUT_X_XL: u8 = 0x28;
pub const FIFO_CTRL: u8 = 0x2E;
pub const OFFSET_X_REG_L_M: u8 = 0x05;
pub const CTRL_REG1_M: u8 = 0x20;
pub const OUT_X_L_M: u8 = 0x28;

/// Bus operation as seen by the device
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// Register block write starting at `reg`
    Write { addr: u8, reg: u8, data: Vec<u8> },
    /// Register block read of `len` bytes starting at `reg`
    Read { addr: u8, reg: u8, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

impl i2c::Error for MockError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

#[derive(Debug, Default)]
struct MockState {
    /// (device address, register) -> value
    registers: HashMap<(u8, u8), u8>,
    ops: Vec<Op>,
    fail_reads: bool,
    fail_writes: bool,
}

/// I2C mock with register memory and auto-increment on both sub-devices
#[derive(Debug, Clone)]
pub struct MockI2c {
    state: Rc<RefCell<MockState>>,
}

impl MockI2c {
    /// Mock answering with the LSM9DS1 identities at the default addresses
    pub fn new() -> Self {
        Self::with_ids(LSM9DS1_AG_ID, LSM9DS1_M_ID)
    }

    pub fn with_ids(ag_id: u8, mag_id: u8) -> Self {
        Self::at(AG, ag_id, MAG, mag_id)
    }

    pub fn at(ag: u8, ag_id: u8, mag: u8, mag_id: u8) -> Self {
        let mock = MockI2c {
            state: Rc::new(RefCell::new(MockState::default())),
        };
        mock.set_register(ag, WHO_AM_I, ag_id);
        mock.set_register(mag, WHO_AM_I, mag_id);
        mock
    }

    pub fn set_register(&self, addr: u8, reg: u8, value: u8) {
        self.state.borrow_mut().registers.insert((addr, reg), value);
    }

    pub fn register(&self, addr: u8, reg: u8) -> u8 {
        *self
            .state
            .borrow()
            .registers
            .get(&(addr, reg))
            .unwrap_or(&0)
    }

    /// Stores a little-endian i16 triple starting at `reg`
    pub fn set_vector(&self, addr: u8, reg: u8, v: [i16; 3]) {
        for (i, value) in v.iter().enumerate() {
            let [lo, hi] = value.to_le_bytes();
            self.set_register(addr, reg + 2 * i as u8, lo);
            self.set_register(addr, reg + 2 * i as u8 + 1, hi);
        }
    }

    pub fn set_raw(&self, addr: u8, reg: u8, bytes: &[u8]) {
        for (i, b) in bytes.iter().enumerate() {
            self.set_register(addr, reg + i as u8, *b);
        }
    }

    pub fn ops(&self) -> Vec<Op> {
        self.state.borrow().ops.clone()
    }

    pub fn writes(&self) -> Vec<Op> {
        self.ops()
            .into_iter()
            .filter(|op| matches!(op, Op::Write { .. }))
            .collect()
    }

    /// Data of every write to `reg` on `addr`, oldest first
    pub fn writes_to(&self, addr: u8, reg: u8) -> Vec<Vec<u8>> {
        self.ops()
            .into_iter()
            .filter_map(|op| match op {
                Op::Write { addr: a, reg: r, data } if a == addr && r == reg => Some(data),
                _ => None,
            })
            .collect()
    }

    pub fn clear_ops(&self) {
        self.state.borrow_mut().ops.clear();
    }

    pub fn fail_reads(&self, fail: bool) {
        self.state.borrow_mut().fail_reads = fail;
    }

    pub fn fail_writes(&self, fail: bool) {
        self.state.borrow_mut().fail_writes = fail;
    }
}

impl ErrorType for MockI2c {
    type Error = MockError;
}

impl i2c::I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        let mut pointer: Option<u8> = None;

        for operation in operations.iter_mut() {
            match operation {
                Operation::Write(bytes) => {
                    let (reg, data) = bytes.split_first().ok_or(MockError)?;
                    pointer = Some(*reg);

                    if data.is_empty() {
                        continue;
                    }
                    if state.fail_writes {
                        return Err(MockError);
                    }
                    for (i, b) in data.iter().enumerate() {
                        state.registers.insert((address, reg + i as u8), *b);
                    }
                    state.ops.push(Op::Write {
                        addr: address,
                        reg: *reg,
                        data: data.to_vec(),
                    });
                }
                Operation::Read(buf) => {
                    if state.fail_reads {
                        return Err(MockError);
                    }
                    let reg = pointer.ok_or(MockError)?;
                    for (i, b) in buf.iter_mut().enumerate() {
                        *b = *state.registers.get(&(address, reg + i as u8)).unwrap_or(&0);
                    }
                    state.ops.push(Op::Read {
                        addr: address,
                        reg,
                        len: buf.len(),
                    });
                }
            }
        }

        Ok(())
    }
}

pub fn assert_close(actual: f32, expected: f32, tolerance: f32) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} within {}, got {}",
        expected,
        tolerance,
        actual
    );
}
