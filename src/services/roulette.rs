//! Run driver: fetch, check, partition, dispatch, report.

use std::sync::Arc;

use serde::Serialize;

use crate::adapters::{DryRunIssueWriter, GitHubClient, GitHubIssueWriter};
use crate::domain::errors::DomainResult;
use crate::domain::models::{Assignment, Config};
use crate::domain::ports::{IssueSearch, IssueWriter};

use super::dispatcher::{ActionDispatcher, DispatchReport};
use super::issue_source::{build_search_query, IssueSource};
use super::partitioner::partition_randomly;

/// Summary of a run that dealt out issues.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Issues matched by the search (after the pull cap).
    pub found: usize,
    pub dry_run: bool,
    pub assignments: Vec<Assignment>,
    pub dispatch: DispatchReport,
}

/// How a run ended.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RunOutcome {
    /// The pool was smaller than `assignees * assignments`; nothing was written.
    NotEnoughIssues { found: usize, needed: usize },
    /// Issues were dealt and the writes were dispatched.
    Completed(RunReport),
}

/// One roulette run against a single repository.
pub struct Roulette {
    config: Config,
    source: IssueSource,
    dispatcher: ActionDispatcher,
}

impl Roulette {
    /// Wire a run from explicit ports.
    pub fn new(config: Config, search: Arc<dyn IssueSearch>, writer: Arc<dyn IssueWriter>) -> Self {
        let query = build_search_query(&config.owner, &config.repo, &config.additional_query_params);
        let source = IssueSource::new(search, query).with_page_size(config.github.page_size);
        let dispatcher = ActionDispatcher::new(
            writer,
            config.labels_to_add.clone(),
            config.comment_template.clone(),
        );
        Self {
            config,
            source,
            dispatcher,
        }
    }

    /// Wire a run against GitHub, picking the writer from `config.dry_run`.
    pub fn for_github(config: Config, client: Arc<GitHubClient>) -> Self {
        let writer: Arc<dyn IssueWriter> = if config.dry_run {
            Arc::new(DryRunIssueWriter::new())
        } else {
            Arc::new(GitHubIssueWriter::new(
                client.clone(),
                config.owner.clone(),
                config.repo.clone(),
            ))
        };
        Self::new(config, client, writer)
    }

    /// Replace the issue source, keeping the query (used to attach a spinner).
    #[must_use]
    pub fn map_source(mut self, f: impl FnOnce(IssueSource) -> IssueSource) -> Self {
        self.source = f(self.source);
        self
    }

    /// Execute the run.
    ///
    /// Fetch errors abort the run. Write errors are collected into the
    /// report; they never abort it.
    pub async fn run(&self) -> DomainResult<RunOutcome> {
        let slug = self.config.repo_slug();
        if self.config.dry_run {
            tracing::info!("Dry-run enabled!");
        }

        let issues = self
            .source
            .fetch_oldest(self.config.issues_to_pull_from)
            .await?;
        tracing::info!(found = issues.len(), repo = %slug, "Found {} un-dealt-with issues in {slug}", issues.len());

        let needed = self.config.issues_needed();
        if needed > issues.len() {
            tracing::info!(
                found = issues.len(),
                needed,
                "Not enough open issues in {slug} for issue roulette! Congratulations!"
            );
            return Ok(RunOutcome::NotEnoughIssues {
                found: issues.len(),
                needed,
            });
        }

        let assignments =
            partition_randomly(&issues, &self.config.assignees, self.config.assignments)?;

        for assignment in &assignments {
            let issue = &assignment.issue;
            tracing::info!(
                issue = issue.number,
                title = %issue.title,
                url = %issue.html_url,
                last_updated = %issue.updated_at.to_rfc3339(),
                assignee = %assignment.assignee,
                "Assigning #{} to {}",
                issue.number,
                assignment.assignee
            );
        }

        let dispatch = self.dispatcher.dispatch(&assignments).await;
        if dispatch.is_success() {
            tracing::info!(writes = dispatch.attempted, "all writes settled");
        } else {
            tracing::error!(
                failed = dispatch.failures.len(),
                writes = dispatch.attempted,
                "{} of {} writes failed",
                dispatch.failures.len(),
                dispatch.attempted
            );
        }

        Ok(RunOutcome::Completed(RunReport {
            found: issues.len(),
            dry_run: self.config.dry_run,
            assignments,
            dispatch,
        }))
    }
}
