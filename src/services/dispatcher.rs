//! Fires the comment / assign / label writes for a set of assignments.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use futures::future::join_all;
use serde::Serialize;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Assignee, Assignment, WriteAction};
use crate::domain::ports::IssueWriter;

/// Placeholder replaced by the assignee handle in comment templates.
pub const ASSIGNEE_PLACEHOLDER: &str = "{assignee}";

/// Render the assignment comment for `assignee`.
pub fn render_comment(template: &str, assignee: &Assignee) -> String {
    template.replace(ASSIGNEE_PLACEHOLDER, assignee.as_str())
}

/// A single write that did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteFailure {
    pub issue: u64,
    pub assignee: Assignee,
    pub action: WriteAction,
    pub error: String,
}

/// Outcome of one dispatch batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DispatchReport {
    /// Writes started (three per assignment).
    pub attempted: usize,
    /// Writes that completed without error.
    pub succeeded: usize,
    /// Every write that failed, in dispatch order.
    pub failures: Vec<WriteFailure>,
}

impl DispatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

type WriteFuture<'a> = Pin<Box<dyn Future<Output = (WriteAction, DomainResult<()>)> + Send + 'a>>;

/// Sends the three writes of each assignment through an [`IssueWriter`].
pub struct ActionDispatcher {
    writer: Arc<dyn IssueWriter>,
    labels: Vec<String>,
    comment_template: String,
}

impl ActionDispatcher {
    pub fn new(
        writer: Arc<dyn IssueWriter>,
        labels: Vec<String>,
        comment_template: impl Into<String>,
    ) -> Self {
        Self {
            writer,
            labels,
            comment_template: comment_template.into(),
        }
    }

    /// The three writes for one assignment, not yet started.
    fn writes_for<'a>(&'a self, assignment: &'a Assignment) -> [WriteFuture<'a>; 3] {
        let number = assignment.issue.number;
        let assignee = &assignment.assignee;
        let body = render_comment(&self.comment_template, assignee);

        [
            Box::pin(async move {
                let result = self.writer.create_comment(number, assignee, &body).await;
                (WriteAction::Comment, result)
            }),
            Box::pin(async move {
                let result = self.writer.add_assignee(number, assignee).await;
                (WriteAction::Assign, result)
            }),
            Box::pin(async move {
                let result = self.writer.add_labels(number, &self.labels).await;
                (WriteAction::AddLabels, result)
            }),
        ]
    }

    /// Start every write of every assignment at once and wait for all of them.
    ///
    /// A failed write never cancels its siblings. All failures are collected
    /// into the report rather than just the first.
    pub async fn dispatch(&self, assignments: &[Assignment]) -> DispatchReport {
        let owners: Vec<&Assignment> = assignments
            .iter()
            .flat_map(|a| std::iter::repeat(a).take(3))
            .collect();
        let writes: Vec<WriteFuture<'_>> =
            assignments.iter().flat_map(|a| self.writes_for(a)).collect();

        let results = join_all(writes).await;

        let mut report = DispatchReport {
            attempted: results.len(),
            ..Default::default()
        };
        for (assignment, (action, result)) in owners.into_iter().zip(results) {
            match result {
                Ok(()) => report.succeeded += 1,
                Err(e) => {
                    tracing::error!(
                        issue = assignment.issue.number,
                        assignee = %assignment.assignee,
                        %action,
                        error = %e,
                        "write failed"
                    );
                    report.failures.push(WriteFailure {
                        issue: assignment.issue.number,
                        assignee: assignment.assignee.clone(),
                        action,
                        error: e.to_string(),
                    });
                }
            }
        }
        report
    }
}
