#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Header parsing over arbitrary bytes — must never panic
    let _ = bmptext::decode(data);
});
