#![no_main]

use embedfs::canonicalize;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str)| {
    let (path, prefix) = data;
    let key = canonicalize(path, prefix);
    assert!(key.as_str().starts_with('/'));
    assert_eq!(canonicalize(key.as_str(), ""), key);
});
