//! Command-line interface.

pub mod commands;
pub mod output;
pub mod types;

use anyhow::Result;

use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::LoggerImpl;

pub use types::{Cli, Commands, ListArgs, RunArgs};

/// Load configuration, install logging and run the selected command.
pub async fn execute(cli: Cli) -> Result<()> {
    let loaded = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    };

    // Logging comes up even when the config is broken so the error is reported.
    let mut logging = loaded
        .as_ref()
        .map(|config| config.logging.clone())
        .unwrap_or_default();
    if let Some(level) = &cli.log_level {
        logging.level.clone_from(level);
    }
    let _logger = LoggerImpl::init(&logging)?;

    let config: Config = loaded?;
    match cli.command.unwrap_or_default() {
        Commands::Run(args) => commands::run::execute(config, &args, cli.json).await,
        Commands::List(args) => commands::list::execute(config, &args, cli.json).await,
        Commands::Config => commands::config::execute(&config, cli.json),
    }
}

/// Report a failed command.
///
/// The process still exits normally: a run has no exit-code contract.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) {
    tracing::error!(error = %format!("{err:#}"), "issue roulette failed");
    if json_mode {
        let body = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
        });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
    }
}
