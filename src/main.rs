//! `radio-code` CLI binary entry point.

use clap::Parser;
use radio_code::cli::{commands, Cli, Commands};
use radio_code::client::RadioCodeCalculator;
use radio_code::error::{ErrorCode, RadioError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(ErrorCode::Success) => {}
        Ok(_) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<ErrorCode, Box<dyn std::error::Error>> {
    match &cli.command {
        Commands::Validate(args) => commands::handle_validate(args),
        Commands::Models => commands::handle_models(),
        Commands::Login => commands::handle_login(&calculator(&cli)?).await,
        Commands::List => commands::handle_list(&calculator(&cli)?).await,
        Commands::Info(args) => commands::handle_info(&calculator(&cli)?, args).await,
        Commands::Calc(args) => commands::handle_calc(&calculator(&cli)?, args).await,
    }
}

fn calculator(cli: &Cli) -> Result<RadioCodeCalculator, RadioError> {
    let calculator = RadioCodeCalculator::from_config(&cli.config()?)?;
    if !calculator.has_api_key() {
        tracing::warn!("No activation key configured; the web API will reject the request");
    }
    Ok(calculator)
}
