//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::models::Config;

#[derive(Parser, Debug)]
#[command(name = "issue-roulette")]
#[command(about = "Hand out stale, untriaged GitHub issues at random", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to run (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Path to a YAML or JSON config file
    #[arg(short, long, global = true, env = "ROULETTE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the configured log level
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Fetch, shuffle and assign issues
    Run(RunArgs),

    /// List the oldest untriaged issues without assigning anything
    List(ListArgs),

    /// Print the effective configuration (token redacted)
    Config,
}

impl Default for Commands {
    fn default() -> Self {
        Self::Run(RunArgs::default())
    }
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RunArgs {
    /// Perform real writes (disables dry-run)
    #[arg(long, conflicts_with = "dry_run")]
    pub live: bool,

    /// Force dry-run regardless of configuration
    #[arg(long)]
    pub dry_run: bool,

    /// Override how many of the oldest issues are pulled
    #[arg(short, long)]
    pub max_issues: Option<usize>,

    /// Override how many issues each assignee receives
    #[arg(short = 'n', long)]
    pub assignments: Option<usize>,
}

impl RunArgs {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if self.live {
            config.dry_run = false;
        }
        if self.dry_run {
            config.dry_run = true;
        }
        if let Some(max) = self.max_issues {
            config.issues_to_pull_from = Some(max);
        }
        if let Some(assignments) = self.assignments {
            config.assignments = assignments;
        }
    }
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ListArgs {
    /// Maximum number of issues to fetch (defaults to the configured pull cap)
    #[arg(short, long)]
    pub limit: Option<usize>,
}
