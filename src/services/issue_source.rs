//! Oldest-first fetch of untriaged issues.

use std::sync::Arc;

use indicatif::ProgressBar;

use crate::domain::errors::DomainResult;
use crate::domain::models::config::MAX_PAGE_SIZE;
use crate::domain::models::Issue;
use crate::domain::ports::IssueSearch;

/// Qualifiers selecting open issues with no milestone and no assignee.
const UNTRIAGED_QUALIFIERS: &str = "is:open is:issue no:milestone no:assignee";

/// Build the search query for untriaged issues in `owner/repo`.
///
/// `extra` is appended verbatim; an empty fragment adds nothing.
pub fn build_search_query(owner: &str, repo: &str, extra: &str) -> String {
    let mut query = format!("{UNTRIAGED_QUALIFIERS} repo:{owner}/{repo}");
    let extra = extra.trim();
    if !extra.is_empty() {
        query.push(' ');
        query.push_str(extra);
    }
    query
}

/// Pages through search results, accumulating the least recently updated issues.
pub struct IssueSource {
    search: Arc<dyn IssueSearch>,
    query: String,
    page_size: u32,
    progress: Option<ProgressBar>,
}

impl IssueSource {
    /// Create a source for `query` using pages of 100.
    pub fn new(search: Arc<dyn IssueSearch>, query: impl Into<String>) -> Self {
        Self {
            search,
            query: query.into(),
            page_size: MAX_PAGE_SIZE,
            progress: None,
        }
    }

    /// Override the page size (clamped to 1..=100).
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    /// Mirror per-page progress onto a spinner.
    #[must_use]
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Fetch up to `max_wanted` issues, oldest first (all of them when `None`).
    ///
    /// Pages are requested strictly one after another. The loop stops when
    /// enough issues are accumulated, in which case the result is cut to
    /// exactly `max_wanted`, or when a page comes back short. Any search
    /// error aborts the fetch and nothing accumulated so far is returned.
    pub async fn fetch_oldest(&self, max_wanted: Option<usize>) -> DomainResult<Vec<Issue>> {
        if max_wanted == Some(0) {
            return Ok(Vec::new());
        }

        let per_page = self.page_size as usize;
        let mut issues: Vec<Issue> = Vec::new();
        let mut page: u32 = 1;

        loop {
            let message = format!("Fetching {}-{} issues…", issues.len(), issues.len() + per_page);
            tracing::info!(page, "{message}");
            if let Some(progress) = &self.progress {
                progress.set_message(message);
            }

            let batch = self.search.search_page(&self.query, page, self.page_size).await?;
            let exhausted = batch.len() < per_page;
            issues.extend(batch);

            if let Some(max) = max_wanted {
                if issues.len() >= max {
                    issues.truncate(max);
                    break;
                }
            }
            if exhausted {
                break;
            }
            page += 1;
        }

        tracing::debug!(count = issues.len(), pages = page, "issue fetch complete");
        Ok(issues)
    }
}
