#![no_main]
use cppx_syntax::tokenize;

#[macro_use]
extern crate libfuzzer_sys;

fuzz_target!(|data: &[u8]| {
    // Errors are expected; panics and overflows are not.
    let _ = tokenize(data);
});
