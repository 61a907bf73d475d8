#![no_main]
use libfuzzer_sys::fuzz_target;

use embedded_hal::i2c::SevenBitAddress;
use embedded_hal_fuzz::i2c::ArbitraryI2c;

fuzz_target!(|i2c: ArbitraryI2c<SevenBitAddress>| {
    // Discard the result as we only care about it it crashes not if there
    // is an error.
    let _ = lsm9ds1::Lsm9ds1::new(i2c);
});
