use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::Issue;

/// Port for reading pages of search results from an issue tracker.
#[async_trait]
pub trait IssueSearch: Send + Sync {
    /// Fetch one page of issues matching `query`, least recently updated first.
    ///
    /// `page` is 1-indexed. A page shorter than `per_page` means the
    /// results are exhausted.
    async fn search_page(&self, query: &str, page: u32, per_page: u32)
        -> DomainResult<Vec<Issue>>;
}
