//! Common test utilities for integration tests
//!
//! In-memory fakes for the issue ports plus issue fixtures.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use issue_roulette::{
    Assignee, DomainError, DomainResult, Issue, IssueSearch, IssueWriter, WriteAction,
};

/// Issue `number`, updated `number` hours after 2016-01-01.
pub fn issue(number: u64) -> Issue {
    let base = Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap();
    Issue {
        number,
        title: format!("Stale issue {number}"),
        html_url: format!("https://github.com/medic/medic-webapp/issues/{number}"),
        updated_at: base + Duration::hours(number as i64),
    }
}

/// Issues 1..=count, oldest first.
pub fn issues(count: u64) -> Vec<Issue> {
    (1..=count).map(issue).collect()
}

/// Search results served from memory, page by page.
pub struct InMemorySearch {
    issues: Vec<Issue>,
    calls: Mutex<Vec<(String, u32, u32)>>,
}

impl InMemorySearch {
    pub fn new(issues: Vec<Issue>) -> Self {
        Self {
            issues,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// `(page, per_page)` of every request, in order.
    pub fn pages(&self) -> Vec<(u32, u32)> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, page, per_page)| (*page, *per_page))
            .collect()
    }

    pub fn queries(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(q, _, _)| q.clone()).collect()
    }
}

#[async_trait]
impl IssueSearch for InMemorySearch {
    async fn search_page(&self, query: &str, page: u32, per_page: u32) -> DomainResult<Vec<Issue>> {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), page, per_page));
        let start = (page.saturating_sub(1) * per_page) as usize;
        let end = (start + per_page as usize).min(self.issues.len());
        Ok(self
            .issues
            .get(start..end)
            .map(<[Issue]>::to_vec)
            .unwrap_or_default())
    }
}

/// Search that serves `good_pages` full pages, then fails.
pub struct FailingSearch {
    pub good_pages: u32,
    calls: Mutex<u32>,
}

impl FailingSearch {
    pub fn after(good_pages: u32) -> Self {
        Self {
            good_pages,
            calls: Mutex::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl IssueSearch for FailingSearch {
    async fn search_page(&self, _query: &str, page: u32, per_page: u32) -> DomainResult<Vec<Issue>> {
        *self.calls.lock().unwrap() += 1;
        if page > self.good_pages {
            return Err(DomainError::ExecutionFailed(
                "GitHub search_issues returned 502 Bad Gateway: upstream".to_string(),
            ));
        }
        let first = u64::from((page - 1) * per_page) + 1;
        Ok((first..first + u64::from(per_page)).map(issue).collect())
    }
}

/// Writer that records every call and always succeeds.
#[derive(Default)]
pub struct RecordingWriter {
    writes: Mutex<Vec<(WriteAction, u64, String)>>,
}

impl RecordingWriter {
    pub fn writes(&self) -> Vec<(WriteAction, u64, String)> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl IssueWriter for RecordingWriter {
    async fn create_comment(&self, number: u64, _assignee: &Assignee, body: &str) -> DomainResult<()> {
        self.writes
            .lock()
            .unwrap()
            .push((WriteAction::Comment, number, body.to_string()));
        Ok(())
    }

    async fn add_assignee(&self, number: u64, assignee: &Assignee) -> DomainResult<()> {
        self.writes
            .lock()
            .unwrap()
            .push((WriteAction::Assign, number, assignee.to_string()));
        Ok(())
    }

    async fn add_labels(&self, number: u64, labels: &[String]) -> DomainResult<()> {
        self.writes
            .lock()
            .unwrap()
            .push((WriteAction::AddLabels, number, labels.join(",")));
        Ok(())
    }
}

/// Setup test logging
pub fn setup_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// JSON body of a search response page built from `issues`.
pub fn search_body(issues: &[Issue]) -> String {
    let items: Vec<serde_json::Value> = issues
        .iter()
        .map(|i| {
            serde_json::json!({
                "id": i.number * 1000,
                "number": i.number,
                "title": i.title,
                "state": "open",
                "html_url": i.html_url,
                "updated_at": i.updated_at.to_rfc3339(),
                "labels": [],
                "assignees": [],
                "milestone": null,
            })
        })
        .collect();
    serde_json::json!({
        "total_count": issues.len(),
        "incomplete_results": false,
        "items": items,
    })
    .to_string()
}
