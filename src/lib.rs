//! Issue Roulette - random triage of stale GitHub issues
//!
//! Pulls the least recently updated open issues that have no milestone and
//! no assignee, shuffles them, deals a fixed number to each person on a
//! list, and for every dealt issue posts a comment, adds the assignee and
//! adds labels. Dry-run (the default) logs those writes instead.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): models, errors and port traits
//! - **Adapters** (`adapters`): GitHub REST client and the dry-run writer
//! - **Service Layer** (`services`): fetch, partition, dispatch and the run driver
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use issue_roulette::{ConfigLoader, GitHubClient, Roulette};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::load()?;
//!     let client = Arc::new(GitHubClient::with_config(config.github_api_token.clone(), &config.github));
//!     let outcome = Roulette::for_github(config, client).run().await?;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::{DryRunIssueWriter, GitHubClient, GitHubIssueWriter};
pub use domain::models::{Assignee, Assignment, Config, Issue, WriteAction};
pub use domain::ports::{IssueSearch, IssueWriter};
pub use domain::{DomainError, DomainResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{ActionDispatcher, DispatchReport, IssueSource, Roulette, RunOutcome, RunReport};
