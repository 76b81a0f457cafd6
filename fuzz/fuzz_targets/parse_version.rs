#![no_main]

use libfuzzer_sys::fuzz_target;
use semver_core::parse;

fuzz_target!(|data: &str| {
    if let Ok(version) = parse(data) {
        assert_eq!(version.to_string(), data);
        assert_eq!(version.cmp(&version), std::cmp::Ordering::Equal);
    }
});
