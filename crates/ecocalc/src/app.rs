//! Application entry point and dispatch.

use std::io::{self, BufRead};
use std::sync::Arc;

use anyhow::{Context, Result};

use ecocalc_assistant::{
    ApiKey, CarbonEstimateRequest, ChatSession, Estimator, GeminiClient, GenerativeBackend,
    SampleBackend, WaterEstimateRequest,
};
use ecocalc_cli::presenter::{
    ChatPresenter, EstimatePresenter, FactorPresenter, ReportPresenter,
};
use ecocalc_cli::{ui, Spinner};
use ecocalc_core::factors::factor_table;
use ecocalc_core::format::format_tonnes;
use ecocalc_core::observer::LoggingObserver;
use ecocalc_core::registry::select_calculators;
use ecocalc_core::{DefaultFactory, FootprintForm, FootprintReport, FootprintState, FormUpdate};

use crate::config::{AppConfig, CarbonArgs, ChatArgs, Command, FootprintArgs, WaterArgs};
use crate::persist;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        ecocalc_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    match &config.command {
        Some(Command::Footprint(args)) => run_footprint(config, args),
        Some(Command::Factors) => {
            FactorPresenter::new(config.json).present(&factor_table());
            Ok(())
        }
        Some(Command::Carbon(args)) => run_carbon(config, args),
        Some(Command::Water(args)) => run_water(config, args),
        Some(Command::Chat(args)) => run_chat(config, args),
        None => {
            let mut cmd = <AppConfig as clap::CommandFactory>::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}

/// Feed a complete form into a fresh state section by section, so every
/// category passes through the observers.
pub fn evaluate(form: FootprintForm) -> Result<FootprintState> {
    let mut state = FootprintState::new();
    state.subscribe(Arc::new(LoggingObserver));
    let updates = [
        FormUpdate::Profile(form.profile),
        FormUpdate::House(form.house),
        FormUpdate::Flights(form.flights),
        FormUpdate::Car(form.car),
        FormUpdate::Motorbike(form.motorbike),
        FormUpdate::PublicTransport(form.public_transport),
        FormUpdate::Spending(form.spending),
    ];
    for update in updates {
        let section = update.category();
        state
            .apply(update)
            .with_context(|| match section {
                Some(category) => format!("{category} section"),
                None => "profile section".to_string(),
            })?;
    }
    Ok(state)
}

fn run_footprint(config: &AppConfig, args: &FootprintArgs) -> Result<()> {
    let form = match &args.input {
        Some(path) => persist::load_form(path)?,
        None => persist::read_form(io::stdin().lock())?,
    };
    let state = evaluate(form)?;

    if let Some(path) = &args.save {
        persist::save_form(state.form(), path)?;
        if !config.quiet {
            ui::print_note(&format!("Form saved to {}", path.display()));
        }
    }

    if let Some(selection) = &args.category {
        return present_categories(config, &state, selection);
    }

    let report = FootprintReport::from_state(&state);
    tracing::info!(total = report.total, "footprint calculated");
    ReportPresenter::new(config.quiet, config.json).present(&report);
    Ok(())
}

fn present_categories(config: &AppConfig, state: &FootprintState, selection: &str) -> Result<()> {
    let factory = DefaultFactory::new();
    let calculators = select_calculators(selection, &factory)?;

    let mut values = serde_json::Map::new();
    for calc in &calculators {
        let value = calc.calculate(state.form())?;
        let category = calc.category();
        if config.json {
            values.insert(category.key().to_string(), serde_json::Value::from(value));
        } else if config.quiet {
            println!("{}", format_tonnes(value));
        } else {
            println!("{}: {} tonnes CO2e", category.label(), format_tonnes(value));
        }
    }
    if config.json {
        println!("{}", serde_json::to_string_pretty(&values)?);
    }
    Ok(())
}

fn backend(config: &AppConfig) -> Result<Box<dyn GenerativeBackend>> {
    if config.offline {
        tracing::info!("offline mode, using sample answers");
        return Ok(Box::new(SampleBackend));
    }
    let key = ApiKey::resolve(config.api_key.as_deref())?;
    let client = GeminiClient::new(key, &config.client_settings())?;
    Ok(Box::new(client))
}

fn run_carbon(config: &AppConfig, args: &CarbonArgs) -> Result<()> {
    let request = CarbonEstimateRequest {
        product: args.product.product.clone(),
        quantity_kg: args.product.quantity,
        region: args.product.region.clone(),
        method: args.product.method,
        transport_km: args.transport,
    };
    request.validate()?;
    let estimator = Estimator::new(backend(config)?);

    let spinner = Spinner::start("Calculating carbon footprint...", config.quiet || config.json);
    let result = estimator.estimate_carbon(&request);
    spinner.finish();

    let estimate = result.context("carbon estimate")?;
    EstimatePresenter::new(config.quiet, config.json).present("Carbon Footprint", &estimate);
    Ok(())
}

fn run_water(config: &AppConfig, args: &WaterArgs) -> Result<()> {
    let request = WaterEstimateRequest {
        product: args.product.product.clone(),
        quantity_kg: args.product.quantity,
        region: args.product.region.clone(),
        method: args.product.method,
        irrigation: args.effective_irrigation(),
    };
    request.validate()?;
    let estimator = Estimator::new(backend(config)?);

    let spinner = Spinner::start("Calculating water footprint...", config.quiet || config.json);
    let result = estimator.estimate_water(&request);
    spinner.finish();

    let estimate = result.context("water estimate")?;
    EstimatePresenter::new(config.quiet, config.json).present("Water Footprint", &estimate);
    Ok(())
}

fn run_chat(config: &AppConfig, args: &ChatArgs) -> Result<()> {
    let mut session = ChatSession::new(backend(config)?);
    let presenter = ChatPresenter::new(config.quiet);
    if !config.quiet {
        for message in session.transcript() {
            presenter.present(message);
        }
    }

    if !args.message.is_empty() {
        for message in &args.message {
            ask(&mut session, &presenter, config.quiet, message)?;
        }
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }
        if let Err(e) = ask(&mut session, &presenter, config.quiet, input) {
            tracing::error!(error = %e, "chat turn failed");
        }
    }
    Ok(())
}

fn ask<B: GenerativeBackend>(
    session: &mut ChatSession<B>,
    presenter: &ChatPresenter,
    quiet: bool,
    input: &str,
) -> Result<()> {
    let spinner = Spinner::start("Thinking...", quiet);
    let result = session.send(input).map(|reply| reply.cloned());
    spinner.finish();

    match result {
        Ok(Some(reply)) => {
            presenter.present(&reply);
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(e) => {
            if let Some(apology) = session.transcript().last() {
                presenter.present(apology);
            }
            Err(e).context("chat request")
        }
    }
}
