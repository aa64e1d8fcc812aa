mod commands;
mod logging;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use commands::{handle_search, ui, Cli, Commands};
use ecostay_config::{Config, ConfigError, ErrorFormatter, Validate};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", ErrorFormatter::new(err));
            return ExitCode::FAILURE;
        }
    };

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::print_error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command.unwrap_or_default() {
        Commands::Tui => {
            let _guard = logging::init_file()?;
            tui::run_tui(config).await?;
        }
        Commands::Search {
            query,
            lat,
            lng,
            top,
        } => {
            logging::init_stderr();
            handle_search(&config, query, lat, lng, top).await?;
        }
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };
    if let Some(endpoint) = &cli.endpoint {
        config.api.endpoint = endpoint.clone();
        config.validate()?;
    }
    Ok(config)
}
