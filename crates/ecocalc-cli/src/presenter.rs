//! Presenters turning results into terminal text.
//!
//! Each presenter renders to a `String` and prints it with `present*`,
//! so the rendering can be checked without capturing stdout.

use std::fmt::Write as _;

use ecocalc_assistant::{ChatMessage, ChatRole, ProductEstimate};
use ecocalc_core::constants::reference::{TARGET_2050_TONNES, US_AVERAGE_TONNES};
use ecocalc_core::factors::FactorEntry;
use ecocalc_core::format::{format_number, format_tonnes, format_usd};
use ecocalc_core::FootprintReport;

use crate::output::{format_percent, format_quantity, table_row};
use crate::ui::{header, highlight};

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to serialise output");
        String::from("{}")
    })
}

/// Footprint results.
pub struct ReportPresenter {
    quiet: bool,
    json: bool,
}

impl ReportPresenter {
    #[must_use]
    pub fn new(quiet: bool, json: bool) -> Self {
        Self { quiet, json }
    }

    #[must_use]
    pub fn render(&self, report: &FootprintReport) -> String {
        if self.json {
            return to_json(report);
        }
        if self.quiet {
            return format_tonnes(report.total);
        }

        let mut out = String::new();
        let _ = writeln!(out, "{}", header("Your Carbon Footprint"));
        let _ = writeln!(
            out,
            "Total: {} tonnes CO2e per year",
            highlight(&format_tonnes(report.total))
        );
        if !report.has_data() {
            let _ = writeln!(out, "No footprint data yet. Fill in at least one category.");
            return out;
        }

        let _ = writeln!(
            out,
            "That is {} of the US average ({US_AVERAGE_TONNES} tonnes).",
            format_percent(report.percent_of_average)
        );
        let _ = writeln!(
            out,
            "Offsetting it would cost about {} per year.",
            format_usd(report.offset_cost_usd)
        );
        if report.meets_target {
            let _ = writeln!(
                out,
                "You are within the 2050 target of {TARGET_2050_TONNES} tonnes per person."
            );
        } else {
            let _ = writeln!(
                out,
                "That is {}x the 2050 target of {TARGET_2050_TONNES} tonnes per person.",
                format_number(report.target_multiple)
            );
        }
        if report.house_per_person > 0.0 {
            let _ = writeln!(
                out,
                "House share per household member: {} tonnes",
                format_tonnes(report.house_per_person)
            );
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Breakdown:");
        for item in &report.breakdown {
            let _ = writeln!(
                out,
                "{}",
                table_row(
                    item.label,
                    &format_tonnes(item.value),
                    &format_percent(item.percentage)
                )
            );
        }

        if !report.recommendations.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Recommendations:");
            for tip in &report.recommendations {
                let _ = writeln!(out, "  - {}", tip.message());
            }
        }
        out
    }

    pub fn present(&self, report: &FootprintReport) {
        println!("{}", self.render(report).trim_end());
    }
}

/// Product carbon or water estimates.
pub struct EstimatePresenter {
    quiet: bool,
    json: bool,
}

impl EstimatePresenter {
    #[must_use]
    pub fn new(quiet: bool, json: bool) -> Self {
        Self { quiet, json }
    }

    #[must_use]
    pub fn render(&self, title: &str, estimate: &ProductEstimate) -> String {
        if self.json {
            return to_json(estimate);
        }
        let total = format_quantity(estimate.total_footprint, &estimate.unit);
        if self.quiet {
            return total;
        }

        let mut out = String::new();
        let _ = writeln!(out, "{}", header(title));
        let _ = writeln!(out, "Total: {}", highlight(&total));
        if !estimate.breakdown.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Breakdown:");
            for share in &estimate.breakdown {
                let _ = writeln!(
                    out,
                    "{}",
                    table_row(
                        &share.category,
                        &format_number(share.value),
                        &format_percent(share.percentage)
                    )
                );
            }
        }
        if !estimate.recommendations.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Recommendations:");
            for tip in &estimate.recommendations {
                let _ = writeln!(out, "  - {tip}");
            }
        }
        out
    }

    pub fn present(&self, title: &str, estimate: &ProductEstimate) {
        println!("{}", self.render(title, estimate).trim_end());
    }
}

/// Chat transcript lines.
pub struct ChatPresenter {
    quiet: bool,
}

impl ChatPresenter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    #[must_use]
    pub fn render(&self, message: &ChatMessage) -> String {
        if self.quiet {
            return message.text.clone();
        }
        let who = match message.role {
            ChatRole::User => "You",
            ChatRole::Assistant => "Assistant",
        };
        format!("{who}: {}", message.text)
    }

    pub fn present(&self, message: &ChatMessage) {
        println!("{}", self.render(message));
    }
}

/// The emission factor table.
pub struct FactorPresenter {
    json: bool,
}

impl FactorPresenter {
    #[must_use]
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    #[must_use]
    pub fn render(&self, factors: &[FactorEntry]) -> String {
        if self.json {
            return to_json(factors);
        }
        let mut out = String::new();
        let mut section = "";
        for entry in factors {
            if entry.section != section {
                if !section.is_empty() {
                    let _ = writeln!(out);
                }
                section = entry.section;
                let _ = writeln!(out, "{}", header(section));
            }
            let _ = writeln!(out, "  {:<20} {:>10}  {}", entry.key, entry.value, entry.unit);
        }
        out
    }

    pub fn present(&self, factors: &[FactorEntry]) {
        println!("{}", self.render(factors).trim_end());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecocalc_assistant::EstimateShare;
    use ecocalc_core::factors::factor_table;
    use ecocalc_core::form::HouseInputs;
    use ecocalc_core::{estimate, FootprintForm};

    fn sample_report() -> FootprintReport {
        let form = FootprintForm {
            house: HouseInputs {
                electricity: 10_000.0,
                household_size: 2,
                ..HouseInputs::default()
            },
            ..FootprintForm::default()
        };
        estimate(form).unwrap()
    }

    fn sample_estimate() -> ProductEstimate {
        ProductEstimate {
            total_footprint: 1200.0,
            unit: "liters".into(),
            breakdown: vec![EstimateShare {
                category: "Blue Water".into(),
                value: 600.0,
                percentage: 50.0,
            }],
            recommendations: vec!["Use drip irrigation".into()],
        }
    }

    #[test]
    fn report_quiet_prints_total_only() {
        let report = sample_report();
        let text = ReportPresenter::new(true, false).render(&report);
        assert_eq!(text, "3.94");
    }

    #[test]
    fn report_full_sections() {
        let text = ReportPresenter::new(false, false).render(&sample_report());
        assert!(text.contains("3.94"));
        assert!(text.contains("of the US average"));
        assert!(text.contains("$59."));
        assert!(text.contains("2050 target"));
        assert!(text.contains("House share per household member: 1.97 tonnes"));
        assert!(text.contains("Public Transport"));
        assert!(text.contains("Improve home energy efficiency"));
    }

    #[test]
    fn report_empty_form() {
        let report = estimate(FootprintForm::default()).unwrap();
        let text = ReportPresenter::new(false, false).render(&report);
        assert!(text.contains("No footprint data yet"));
    }

    #[test]
    fn report_json_is_valid() {
        let text = ReportPresenter::new(false, true).render(&sample_report());
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["breakdown"].as_array().unwrap().len(), 6);
        assert!(value["recommendations"].is_array());
    }

    #[test]
    fn estimate_render() {
        let text =
            EstimatePresenter::new(false, false).render("Water Footprint", &sample_estimate());
        assert!(text.contains("Water Footprint"));
        assert!(text.contains("1,200 liters"));
        assert!(text.contains("Blue Water"));
        assert!(text.contains("50.0%"));
        assert!(text.contains("  - Use drip irrigation"));
    }

    #[test]
    fn estimate_quiet() {
        let text = EstimatePresenter::new(true, false).render("x", &sample_estimate());
        assert_eq!(text, "1,200 liters");
    }

    #[test]
    fn chat_lines() {
        let presenter = ChatPresenter::new(false);
        let message = ChatMessage {
            role: ChatRole::Assistant,
            text: "Hi".into(),
        };
        assert_eq!(presenter.render(&message), "Assistant: Hi");
        assert_eq!(ChatPresenter::new(true).render(&message), "Hi");
    }

    #[test]
    fn factor_table_grouped() {
        let text = FactorPresenter::new(false).render(&factor_table());
        assert!(text.contains("=== house ==="));
        assert!(text.contains("electricity"));
        assert!(text.contains("0.3937"));
        assert!(text.contains("=== spending ==="));
    }

    #[test]
    fn factor_table_keeps_small_factors_distinct() {
        let text = FactorPresenter::new(false).render(&factor_table());
        let value_of = |key: &str| {
            text.lines().find_map(|line| {
                let mut cols = line.split_whitespace();
                if cols.next() == Some(key) {
                    cols.next().map(str::to_string)
                } else {
                    None
                }
            })
        };
        assert_eq!(value_of("coach").as_deref(), Some("0.027"));
        assert_eq!(value_of("longTrain").as_deref(), Some("0.033"));
        assert_eq!(value_of("flightEconomy").as_deref(), Some("0.2"));
    }

    #[test]
    fn factor_json() {
        let text = FactorPresenter::new(true).render(&factor_table());
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(value.as_array().unwrap().len() > 30);
    }
}
