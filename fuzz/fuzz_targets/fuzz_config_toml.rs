#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(config) = toml::from_str::<embedfs::BuildConfig>(content) {
            let _ = config.mod_time_override();
            let _ = config.compression_level();
        }
    }
});
