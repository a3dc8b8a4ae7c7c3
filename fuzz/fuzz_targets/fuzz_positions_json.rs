#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Lenient position parsing must never panic on malformed records
        let _ = alchm::infrastructure::parse_snapshot(content);
    }
});
