// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config and logging, then run the console or a one-shot command

mod cli;
mod config;
mod errors;
mod handlers;
mod models;
mod services;

#[cfg(test)]
mod test_support;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use config::Config;
use dotenv::dotenv;
use handlers::{render_all, Console};
use services::PlacesApiClient;
use std::io::{self, IsTerminal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration, command line wins over environment
    let cli = Cli::parse();
    let mut config = Config::from_env()
        .map_err(anyhow::Error::msg)
        .context("configuration error")?;
    cli.apply_overrides(&mut config);

    // 3. Initialize logging, before validation so its warnings are visible
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "warn,reqwest=warn"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("configuration error")?;

    log::info!("Starting places-console...");
    log::info!("Environment: {}", config.environment);
    log::info!("API: {} (GraphQL: {}, mode: {})", config.api_base_url, config.graphql_url, config.graphql_mode);

    // 4. Build the API client
    let client = PlacesApiClient::from_config(&config).context("failed to initialize API client")?;
    let color = !config.no_color;

    // 5. Interactive console or a single command
    match cli.command {
        None | Some(Command::Interactive) => {
            let stdin = io::stdin();
            let masked = stdin.is_terminal();
            let mut console = Console::new(client, config.graphql_mode, color, stdin.lock(), io::stdout());
            if masked {
                console = console.with_secret_reader(handlers::forms::read_masked);
            }
            console.run().await.context("console I/O failed")?;
        }
        Some(command) => {
            let outcomes = cli::run_once(&client, command).await;
            render_all(&outcomes, &mut io::stdout(), color).context("failed to write output")?;
            if outcomes.iter().any(|o| o.is_error()) {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
