//! Number formatting for display.

/// Group the digits of an integer string with commas.
fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format with thousands separators and at most two fraction digits,
/// dropping trailing zeros: `1234.5` → `"1,234.5"`, `2.0` → `"2"`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');
    let negative = value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Tonnes with exactly two decimals.
#[must_use]
pub fn format_tonnes(value: f64) -> String {
    format!("{value:.2}")
}

/// Currency with thousands separators and two decimals.
#[must_use]
pub fn format_usd(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${}.{frac_part}", group_thousands(int_part))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_number_thousands() {
        assert_eq!(format_number(1_000_000.0), "1,000,000");
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(1234.5), "1,234.5");
    }

    #[test]
    fn format_number_rounds_to_two_places() {
        assert_eq!(format_number(3.14159), "3.14");
        assert_eq!(format_number(0.005_1), "0.01");
        assert_eq!(format_number(2.999), "3");
    }

    #[test]
    fn format_number_negative_and_zero() {
        assert_eq!(format_number(-1234.56), "-1,234.56");
        assert_eq!(format_number(-0.001), "0");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn format_tonnes_fixed() {
        assert_eq!(format_tonnes(2.0), "2.00");
        assert_eq!(format_tonnes(15.239), "15.24");
    }

    #[test]
    fn format_usd_grouped() {
        assert_eq!(format_usd(228.6), "$228.60");
        assert_eq!(format_usd(12_345.0), "$12,345.00");
    }
}
