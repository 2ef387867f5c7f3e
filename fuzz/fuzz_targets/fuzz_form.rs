#![no_main]

use libfuzzer_sys::fuzz_target;

use ecocalc_core::{estimate, FootprintForm};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(form) = FootprintForm::from_json(text) else {
        return;
    };

    // Any parsed form either evaluates or is rejected, never panics
    if let Ok(report) = estimate(form) {
        if !report.total.is_finite() {
            return;
        }
        assert!(report.total >= 0.0);
        let sum: f64 = report.breakdown.iter().map(|item| item.value).sum();
        assert!((sum - report.total).abs() <= 1e-6 * report.total.max(1.0));
    }
});
