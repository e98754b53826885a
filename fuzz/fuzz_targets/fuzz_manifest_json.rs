#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(manifest) = embedfs::parse_manifest(content) {
            let _ = embedfs::runtime::Catalog::new(&manifest);
        }
    }
});
