//! EcoCalc: personal carbon footprint calculator.

use clap::Parser;
use ecocalc_core::exit_codes;
use ecocalc_lib::{app, config::AppConfig, errors, logging};

fn main() {
    let config = match AppConfig::try_parse() {
        Ok(config) => config,
        Err(e) => {
            let code = if e.use_stderr() {
                exit_codes::ERROR_CONFIG
            } else {
                exit_codes::SUCCESS
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    logging::init(config.verbose);

    if let Err(err) = app::run(&config) {
        ecocalc_cli::ui::print_error(&format!("{err:#}"));
        std::process::exit(errors::exit_code(&err));
    }
}
