//! Adapters implementing the domain ports.

pub mod dry_run;
pub mod github;

pub use dry_run::DryRunIssueWriter;
pub use github::{GitHubClient, GitHubIssueWriter};
