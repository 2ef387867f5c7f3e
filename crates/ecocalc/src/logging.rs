//! Tracing subscriber setup.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Filter from a `RUST_LOG` value, falling back to WARN when it is unset,
/// empty or unparsable. `--verbose` lifts the global level to DEBUG on top.
#[must_use]
pub fn env_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let filter = rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));
    if verbose {
        filter.add_directive(LevelFilter::DEBUG.into())
    } else {
        filter
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays parseable.
pub fn init(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_warn() {
        assert_eq!(env_filter(false, None).to_string(), "warn");
    }

    #[test]
    fn rust_log_is_honoured() {
        assert!(env_filter(false, Some("debug")).to_string().contains("debug"));
        let scoped = env_filter(false, Some("ecocalc_core=trace")).to_string();
        assert!(scoped.contains("ecocalc_core=trace"), "{scoped}");
    }

    #[test]
    fn verbose_raises_to_debug() {
        assert_eq!(env_filter(true, None).to_string(), "debug");
        let scoped = env_filter(true, Some("ecocalc_core=trace")).to_string();
        assert!(scoped.contains("ecocalc_core=trace"), "{scoped}");
        assert!(scoped.contains("debug"), "{scoped}");
    }

    #[test]
    fn invalid_rust_log_falls_back() {
        assert_eq!(env_filter(false, Some("ecocalc=loud")).to_string(), "warn");
        assert_eq!(env_filter(false, Some("  ")).to_string(), "warn");
    }
}
