//! Zero Trust Risk Console - command line entry point
//!
//! ```text
//! risk-console [check] [Field=value ...]   score one incident
//! risk-console health                      probe the engine
//! ```

use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use risk_console::constants::{APP_VERSION, DEFAULT_LOG_FILTER};
use risk_console::terminal::{ArgsForm, TerminalSurface, TerminalTrigger};
use risk_console::{check_risk, Config, RiskClient};

/// Label of the terminal trigger
const TRIGGER_LABEL: &str = "Analyze Risk";

enum Command {
    Check(Vec<String>),
    Health,
}

fn parse_command(mut args: Vec<String>) -> Command {
    match args.first().map(String::as_str) {
        Some("health") => Command::Health,
        Some("check") => {
            args.remove(0);
            Command::Check(args)
        }
        _ => Command::Check(args),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = Config::from_env().context("invalid configuration")?;

    tracing::info!("Risk Console v{} using engine {}", APP_VERSION, config.engine_url);

    let client = RiskClient::new(config)?;

    match parse_command(std::env::args().skip(1).collect()) {
        Command::Health => match client.health_check().await {
            Ok(health) => {
                println!("{}: {}", health.service, health.status);
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                eprintln!("! {}", e);
                Ok(ExitCode::FAILURE)
            }
        },
        Command::Check(args) => {
            let form = ArgsForm::parse(&args);
            let mut trigger = TerminalTrigger::stderr(TRIGGER_LABEL);
            let mut surface = TerminalSurface::stdio();

            let outcome = check_risk(&client, &form, &mut trigger, &mut surface).await;

            Ok(if outcome.is_rendered() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
    }
}
