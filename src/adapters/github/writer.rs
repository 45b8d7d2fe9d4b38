//! Live issue writer.
//!
//! Sends each write to GitHub and logs a confirmation once it succeeds.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::Assignee;
use crate::domain::ports::IssueWriter;

use super::client::GitHubClient;

/// [`IssueWriter`] that performs real writes against one repository.
#[derive(Debug, Clone)]
pub struct GitHubIssueWriter {
    /// Shared GitHub HTTP client.
    client: Arc<GitHubClient>,
    owner: String,
    repo: String,
}

impl GitHubIssueWriter {
    /// Create a writer bound to `owner/repo`.
    pub fn new(client: Arc<GitHubClient>, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

#[async_trait]
impl IssueWriter for GitHubIssueWriter {
    async fn create_comment(
        &self,
        number: u64,
        _assignee: &Assignee,
        body: &str,
    ) -> DomainResult<()> {
        self.client
            .post_comment(&self.owner, &self.repo, number, body)
            .await?;
        tracing::info!(issue = number, "Commented on #{number}");
        Ok(())
    }

    async fn add_assignee(&self, number: u64, assignee: &Assignee) -> DomainResult<()> {
        self.client
            .add_assignees(&self.owner, &self.repo, number, &[assignee.to_string()])
            .await?;
        tracing::info!(issue = number, %assignee, "Assigned #{number} to {assignee}");
        Ok(())
    }

    async fn add_labels(&self, number: u64, labels: &[String]) -> DomainResult<()> {
        self.client
            .add_labels(&self.owner, &self.repo, number, labels)
            .await?;
        tracing::info!(issue = number, ?labels, "Added {labels:?} to #{number}");
        Ok(())
    }
}
