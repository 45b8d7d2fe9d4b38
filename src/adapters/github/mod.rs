//! GitHub Issues adapter.
//!
//! Reads untriaged issues through the search API and writes comments,
//! assignees and labels through the issues API.

pub mod client;
pub mod models;
pub mod writer;

pub use client::GitHubClient;
pub use writer::GitHubIssueWriter;
