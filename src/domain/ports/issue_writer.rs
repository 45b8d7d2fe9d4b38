use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::Assignee;

/// Port for the state-changing calls made on an assigned issue.
///
/// Every call is additive: assigning does not clear other assignees and
/// adding labels does not clear existing labels. None of them are
/// idempotent at this level, a second run will comment again.
#[async_trait]
pub trait IssueWriter: Send + Sync {
    /// Post `body` as a comment on issue `number`.
    async fn create_comment(&self, number: u64, assignee: &Assignee, body: &str)
        -> DomainResult<()>;

    /// Add `assignee` to the issue's assignees.
    async fn add_assignee(&self, number: u64, assignee: &Assignee) -> DomainResult<()>;

    /// Add `labels` to the issue.
    async fn add_labels(&self, number: u64, labels: &[String]) -> DomainResult<()>;
}
