//! Spinner shown while waiting for the assistant.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK: Duration = Duration::from_millis(100);

/// Transient spinner on stderr. Hidden in quiet mode and when stderr is
/// not a terminal.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    #[must_use]
    pub fn start(message: &str, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new_spinner();
            bar.set_style(ProgressStyle::default_spinner());
            bar.enable_steady_tick(TICK);
            bar
        };
        bar.set_message(message.to_string());
        Self { bar }
    }

    /// Remove the spinner line.
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_spinner_is_hidden() {
        let spinner = Spinner::start("Thinking...", true);
        assert!(spinner.bar.is_hidden());
        spinner.finish();
    }

    #[test]
    fn spinner_start_and_finish() {
        Spinner::start("Calculating...", false).finish();
    }
}
