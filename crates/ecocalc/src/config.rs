//! Application configuration from CLI flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use ecocalc_assistant::backend::{DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT};
use ecocalc_assistant::{ClientSettings, Irrigation, ProductionMethod};

/// EcoCalc: personal carbon footprint calculator.
#[derive(Parser, Debug)]
#[command(name = "ecocalc", version, about)]
pub struct AppConfig {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbose output (debug logging).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (only output the headline number).
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,

    /// API key for the generative service.
    #[arg(long, env = "ECOCALC_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Model used for estimates and chat.
    #[arg(long, env = "ECOCALC_MODEL", default_value = DEFAULT_MODEL, global = true)]
    pub model: String,

    /// Base URL of the generative service.
    #[arg(long, env = "ECOCALC_ENDPOINT", default_value = DEFAULT_ENDPOINT, global = true)]
    pub endpoint: String,

    /// Request timeout (e.g., "30s", "2m").
    #[arg(long, default_value = "60s", global = true)]
    pub timeout: String,

    /// Answer estimates and chat with built-in sample data instead of the service.
    #[arg(long, global = true)]
    pub offline: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Calculate a personal footprint from a form (JSON file or stdin).
    Footprint(FootprintArgs),
    /// List the emission factors.
    Factors,
    /// Estimate the carbon footprint of an agricultural product.
    Carbon(CarbonArgs),
    /// Estimate the water footprint of an agricultural product.
    Water(WaterArgs),
    /// Ask the footprint assistant.
    Chat(ChatArgs),
}

#[derive(Args, Debug)]
pub struct FootprintArgs {
    /// Form file; reads stdin when omitted.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Only show one category, or "all".
    #[arg(long)]
    pub category: Option<String>,

    /// Save the form to this file.
    #[arg(long)]
    pub save: Option<PathBuf>,
}

/// Fields shared by both product estimates.
#[derive(Args, Debug)]
pub struct ProductArgs {
    /// Product, such as wheat or coffee.
    pub product: String,

    /// Growing region.
    #[arg(long, default_value = "Global Average")]
    pub region: String,

    /// Quantity in kg.
    #[arg(long, default_value_t = 1.0)]
    pub quantity: f64,

    /// conventional, organic, regenerative or hydroponic.
    #[arg(long, default_value = "conventional")]
    pub method: ProductionMethod,
}

#[derive(Args, Debug)]
pub struct CarbonArgs {
    #[command(flatten)]
    pub product: ProductArgs,

    /// Transport distance in km (0 to 1000).
    #[arg(long, default_value_t = 100.0)]
    pub transport: f64,
}

#[derive(Args, Debug)]
pub struct WaterArgs {
    #[command(flatten)]
    pub product: ProductArgs,

    /// surface, sprinkler, drip or micro.
    #[arg(long, default_value = "surface")]
    pub irrigation: Irrigation,

    /// Crop is rain-fed, no irrigation.
    #[arg(long, conflicts_with = "irrigation")]
    pub rainfed: bool,
}

impl WaterArgs {
    #[must_use]
    pub fn effective_irrigation(&self) -> Irrigation {
        if self.rainfed {
            Irrigation::Rainfed
        } else {
            self.irrigation
        }
    }
}

#[derive(Args, Debug)]
pub struct ChatArgs {
    /// Message to send; repeat for a scripted conversation. Without it,
    /// messages are read from stdin line by line.
    #[arg(short, long)]
    pub message: Vec<String>,
}

impl AppConfig {
    /// Parse timeout string into Duration.
    #[must_use]
    pub fn timeout_duration(&self) -> Duration {
        parse_duration(&self.timeout).unwrap_or(DEFAULT_TIMEOUT)
    }

    #[must_use]
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            endpoint: self.endpoint.clone(),
            model: self.model.clone(),
            timeout: self.timeout_duration(),
        }
    }
}

/// Parse a duration string like "2m", "30s", "500ms".
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        Some(Duration::from_millis(ms.parse().ok()?))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n * 60))
    } else if let Some(secs) = s.strip_suffix('s') {
        Some(Duration::from_secs(secs.parse().ok()?))
    } else {
        Some(Duration::from_secs(s.parse().ok()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        AppConfig::command().debug_assert();
    }

    #[test]
    fn parse_duration_formats() {
        assert_eq!(parse_duration("2m"), Some(Duration::from_secs(120)));
        assert_eq!(parse_duration("30s"), Some(Duration::from_secs(30)));
        assert_eq!(parse_duration("500ms"), Some(Duration::from_millis(500)));
        assert_eq!(parse_duration("15"), Some(Duration::from_secs(15)));
        assert_eq!(parse_duration("soon"), None);
    }

    #[test]
    fn footprint_args() {
        let config = AppConfig::try_parse_from([
            "ecocalc", "footprint", "--input", "form.json", "--category", "house", "--json",
        ])
        .unwrap();
        assert!(config.json);
        let Some(Command::Footprint(args)) = config.command else {
            panic!("expected footprint");
        };
        assert_eq!(args.input, Some(PathBuf::from("form.json")));
        assert_eq!(args.category.as_deref(), Some("house"));
    }

    #[test]
    fn carbon_args() {
        let config = AppConfig::try_parse_from([
            "ecocalc", "carbon", "Coffee", "--region", "Africa", "--method", "organic",
            "--transport", "250", "--offline",
        ])
        .unwrap();
        assert!(config.offline);
        let Some(Command::Carbon(args)) = config.command else {
            panic!("expected carbon");
        };
        assert_eq!(args.product.product, "Coffee");
        assert_eq!(args.product.method, ProductionMethod::Organic);
        assert!((args.transport - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn water_rainfed() {
        let config = AppConfig::try_parse_from(["ecocalc", "water", "Rice", "--rainfed"]).unwrap();
        let Some(Command::Water(args)) = config.command else {
            panic!("expected water");
        };
        assert_eq!(args.effective_irrigation(), Irrigation::Rainfed);
    }

    #[test]
    fn unknown_method_rejected() {
        let parsed = AppConfig::try_parse_from(["ecocalc", "carbon", "Rice", "--method", "magic"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn client_settings_from_flags() {
        let config = AppConfig::try_parse_from([
            "ecocalc", "--model", "m", "--endpoint", "http://localhost:1", "--timeout", "5s",
            "factors",
        ])
        .unwrap();
        let settings = config.client_settings();
        assert_eq!(settings.url(), "http://localhost:1/models/m:generateContent");
        assert_eq!(settings.timeout, Duration::from_secs(5));
    }
}
