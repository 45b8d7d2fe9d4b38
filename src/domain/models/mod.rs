pub mod config;
pub mod issue;

pub use config::{Config, GitHubConfig, LogFormat, LoggingConfig};
pub use issue::{Assignee, Assignment, Issue, WriteAction};
