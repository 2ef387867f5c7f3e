#![no_main]

use libfuzzer_sys::fuzz_target;

use ecocalc_assistant::estimate::parse_estimate;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Should not panic
        let _ = parse_estimate(text);
    }
});
