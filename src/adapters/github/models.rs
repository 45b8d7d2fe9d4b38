//! GitHub REST API request and response payloads.
//!
//! These structs map to the GitHub REST API v3 JSON bodies used by the
//! adapter and are not part of the domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::Issue;

/// Response body of `GET /search/issues`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchIssuesResponse {
    /// Total number of matches (may exceed what the API will page through).
    pub total_count: u64,
    /// Set when the search timed out before collecting every match.
    #[serde(default)]
    pub incomplete_results: bool,
    /// Matches on the requested page.
    #[serde(default)]
    pub items: Vec<SearchIssueItem>,
}

/// One search hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchIssueItem {
    /// Sequential number within the repository.
    pub number: u64,
    /// Issue title.
    pub title: String,
    /// URL to view the issue in the GitHub UI.
    pub html_url: String,
    /// ISO 8601 timestamp of the last update.
    pub updated_at: DateTime<Utc>,
}

impl From<SearchIssueItem> for Issue {
    fn from(item: SearchIssueItem) -> Self {
        Self {
            number: item.number,
            title: item.title,
            html_url: item.html_url,
            updated_at: item.updated_at,
        }
    }
}

/// Request body for posting a comment on an issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubCommentRequest {
    /// The comment body (Markdown).
    pub body: String,
}

/// Request body for `POST /repos/{owner}/{repo}/issues/{number}/assignees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubAssigneesRequest {
    /// Logins to add. Existing assignees are kept.
    pub assignees: Vec<String>,
}

/// Request body for `POST /repos/{owner}/{repo}/issues/{number}/labels`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubLabelsRequest {
    /// Label names to add. Existing labels are kept.
    pub labels: Vec<String>,
}
