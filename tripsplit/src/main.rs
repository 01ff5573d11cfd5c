mod bootstrap;
mod cli;
mod commands;

use bootstrap::{AppConfig, init_logging};
use chrono::Local;
use clap::Parser;
use cli::{Cli, Command};
use std::process::ExitCode;
use tripsplit_application::StoreError;
use tripsplit_presentation::format_store_error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let config = AppConfig::from_env().with_data_file(cli.data_file);
    match run(cli.command, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "Command failed");
            eprintln!("Error: {}", describe(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, config: &AppConfig) -> anyhow::Result<String> {
    let mut store = config.open_store()?;
    commands::execute(command, &mut store, Local::now().date_naive())
}

fn describe(err: &anyhow::Error) -> String {
    match err.downcast_ref::<StoreError>() {
        Some(store_error) => format_store_error(store_error),
        None => format!("{err:#}"),
    }
}
