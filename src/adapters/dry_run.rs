//! Logging-only issue writer.
//!
//! Selected when dry-run is on. Every write becomes a `DRYRUN:` log line
//! and is remembered so the caller can report what would have happened.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Assignee, WriteAction};
use crate::domain::ports::IssueWriter;

/// A write that was skipped because of dry-run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedWrite {
    pub action: WriteAction,
    pub issue: u64,
    pub description: String,
}

/// [`IssueWriter`] that never touches the network.
#[derive(Debug, Default)]
pub struct DryRunIssueWriter {
    planned: Mutex<Vec<PlannedWrite>>,
}

impl DryRunIssueWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes recorded so far, in call order.
    pub fn planned(&self) -> Vec<PlannedWrite> {
        self.planned
            .lock()
            .map(|planned| planned.clone())
            .unwrap_or_default()
    }

    fn record(&self, action: WriteAction, issue: u64, description: String) {
        tracing::info!(issue, %action, "{description}");
        if let Ok(mut planned) = self.planned.lock() {
            planned.push(PlannedWrite {
                action,
                issue,
                description,
            });
        }
    }
}

#[async_trait]
impl IssueWriter for DryRunIssueWriter {
    async fn create_comment(&self, number: u64, assignee: &Assignee, _body: &str) -> DomainResult<()> {
        self.record(
            WriteAction::Comment,
            number,
            format!("DRYRUN: would comment on #{number} for {assignee}"),
        );
        Ok(())
    }

    async fn add_assignee(&self, number: u64, assignee: &Assignee) -> DomainResult<()> {
        self.record(
            WriteAction::Assign,
            number,
            format!("DRYRUN: would assign #{number} to {assignee}"),
        );
        Ok(())
    }

    async fn add_labels(&self, number: u64, labels: &[String]) -> DomainResult<()> {
        self.record(
            WriteAction::AddLabels,
            number,
            format!("DRYRUN: would have added {labels:?} to #{number}"),
        );
        Ok(())
    }
}
