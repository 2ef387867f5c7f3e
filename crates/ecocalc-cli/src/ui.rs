//! Styled text helpers.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// A section header line.
#[must_use]
pub fn header(text: &str) -> String {
    let plain = format!("=== {text} ===");
    if is_color_disabled() {
        plain
    } else {
        style(plain).bold().cyan().to_string()
    }
}

/// Emphasised value, such as the headline total.
#[must_use]
pub fn highlight(text: &str) -> String {
    if is_color_disabled() {
        text.to_string()
    } else {
        style(text).bold().green().to_string()
    }
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

/// Print a note to stderr, such as where a form was saved.
pub fn print_note(text: &str) {
    if is_color_disabled() {
        eprintln!("[OK] {text}");
    } else {
        eprintln!("{} {text}", style("[OK]").green().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_contains_text() {
        assert!(header("Results").contains("=== Results ==="));
    }

    #[test]
    fn highlight_contains_text() {
        assert!(highlight("12.34").contains("12.34"));
    }

    #[test]
    fn print_helpers_do_not_panic() {
        print_error("test error message");
        print_note("");
    }
}
