//! Implementation of the `issue-roulette config` command.

use anyhow::{Context, Result};

use crate::domain::models::Config;

/// Print the effective configuration with the token redacted.
pub fn execute(config: &Config, json_mode: bool) -> Result<()> {
    let redacted = config.redacted();
    let rendered = if json_mode {
        serde_json::to_string_pretty(&redacted).context("Failed to serialize configuration")?
    } else {
        serde_yaml::to_string(&redacted).context("Failed to serialize configuration")?
    };
    println!("{}", rendered.trim_end());
    Ok(())
}
