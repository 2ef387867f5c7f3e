//! CLI output formatting.

use ecocalc_core::format::format_number;

/// Percentage with one decimal: `42.345` → `"42.3%"`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// A quantity followed by its unit: `"1,200 liters"`.
#[must_use]
pub fn format_quantity(value: f64, unit: &str) -> String {
    if unit.is_empty() {
        format_number(value)
    } else {
        format!("{} {unit}", format_number(value))
    }
}

/// One aligned row of a breakdown table.
#[must_use]
pub fn table_row(label: &str, value: &str, share: &str) -> String {
    format!("  {label:<20} {value:>12} {share:>8}")
}
