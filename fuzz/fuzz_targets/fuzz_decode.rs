#![no_main]

use embedfs::{decode, Encoding};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(payload) = std::str::from_utf8(data) {
        // Arbitrary payloads must fail with an error, never a panic
        let _ = decode(payload, Encoding::Gzip);
        let _ = decode(payload, Encoding::Identity);
    }
});
