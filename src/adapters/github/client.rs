//! GitHub HTTP client.
//!
//! Wraps the GitHub REST API v3, providing typed methods for the search
//! read and the three issue writes. Failures are returned as-is: there
//! is no retry and no rate limiting.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{GitHubConfig, Issue};
use crate::domain::ports::IssueSearch;

use super::models::{
    GitHubAssigneesRequest, GitHubCommentRequest, GitHubLabelsRequest, SearchIssuesResponse,
};

/// HTTP client for the GitHub REST API v3.
///
/// All methods return [`DomainResult`]. Transport failures and non-2xx
/// statuses map to [`DomainError::ExecutionFailed`], undecodable bodies
/// to [`DomainError::SerializationError`].
#[derive(Debug, Clone)]
pub struct GitHubClient {
    /// The underlying HTTP client.
    http: Client,
    /// API root, without a trailing slash.
    base_url: String,
    /// Personal access token. Empty means unauthenticated requests.
    token: String,
    /// `User-Agent` header value.
    user_agent: String,
}

impl GitHubClient {
    /// Create a client from explicit endpoint settings.
    pub fn with_config(token: impl Into<String>, config: &GitHubConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.api_url.trim_end_matches('/').to_string(),
            token: token.into(),
            user_agent: config.user_agent.clone(),
        }
    }

    /// Build an authorized request for `path` (which starts with `/`).
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header("User-Agent", &self.user_agent);
        if !self.token.is_empty() {
            req = req.header("Authorization", format!("Bearer {}", self.token));
        }
        req
    }

    /// Send `req` and turn transport errors and non-2xx statuses into errors.
    async fn send(op: &str, req: RequestBuilder) -> DomainResult<Response> {
        let resp = req.send().await.map_err(|e| {
            DomainError::ExecutionFailed(format!("GitHub {op} request failed: {e}"))
        })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::ExecutionFailed(format!(
                "GitHub {op} returned {status}: {body}"
            )));
        }

        Ok(resp)
    }

    async fn parse<T: DeserializeOwned>(op: &str, resp: Response) -> DomainResult<T> {
        let bytes = resp.bytes().await.map_err(|e| {
            DomainError::ExecutionFailed(format!("GitHub {op} body read failed: {e}"))
        })?;
        serde_json::from_slice(&bytes).map_err(|e| {
            DomainError::SerializationError(format!("GitHub {op} parse failed: {e}"))
        })
    }

    /// Run an issue search, sorted by last update, oldest first.
    pub async fn search_issues(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> DomainResult<SearchIssuesResponse> {
        let req = self.request(Method::GET, "/search/issues").query(&[
            ("q", query.to_string()),
            ("sort", "updated".to_string()),
            ("order", "asc".to_string()),
            ("per_page", per_page.to_string()),
            ("page", page.to_string()),
        ]);

        let resp = Self::send("search_issues", req).await?;
        let results: SearchIssuesResponse = Self::parse("search_issues", resp).await?;
        if results.incomplete_results {
            tracing::warn!(page, "GitHub search returned incomplete results");
        }
        Ok(results)
    }

    /// Post a comment on an issue.
    pub async fn post_comment(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        comment: &str,
    ) -> DomainResult<()> {
        let path = format!("/repos/{owner}/{repo}/issues/{issue_number}/comments");
        let body = GitHubCommentRequest {
            body: comment.to_string(),
        };

        Self::send("post_comment", self.request(Method::POST, &path).json(&body)).await?;
        Ok(())
    }

    /// Add assignees to an issue, keeping any existing ones.
    pub async fn add_assignees(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        assignees: &[String],
    ) -> DomainResult<()> {
        let path = format!("/repos/{owner}/{repo}/issues/{issue_number}/assignees");
        let body = GitHubAssigneesRequest {
            assignees: assignees.to_vec(),
        };

        Self::send("add_assignees", self.request(Method::POST, &path).json(&body)).await?;
        Ok(())
    }

    /// Add labels to an issue, keeping any existing ones.
    pub async fn add_labels(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        labels: &[String],
    ) -> DomainResult<()> {
        let path = format!("/repos/{owner}/{repo}/issues/{issue_number}/labels");
        let body = GitHubLabelsRequest {
            labels: labels.to_vec(),
        };

        Self::send("add_labels", self.request(Method::POST, &path).json(&body)).await?;
        Ok(())
    }
}

#[async_trait]
impl IssueSearch for GitHubClient {
    async fn search_page(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> DomainResult<Vec<Issue>> {
        let results = self.search_issues(query, page, per_page).await?;
        Ok(results.items.into_iter().map(Issue::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_public_api() {
        let client = GitHubClient::with_config("ghp_test_token", &GitHubConfig::default());
        assert_eq!(client.token, "ghp_test_token");
        assert_eq!(client.base_url, "https://api.github.com");
        assert_eq!(client.user_agent, "github-issue-roulette");
    }

    #[test]
    fn test_with_config_trims_trailing_slash() {
        let config = GitHubConfig {
            api_url: "http://127.0.0.1:1234/".to_string(),
            ..Default::default()
        };
        let client = GitHubClient::with_config("", &config);
        assert_eq!(client.base_url, "http://127.0.0.1:1234");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_execution_failure() {
        let config = GitHubConfig {
            api_url: "http://127.0.0.1:9".to_string(),
            ..Default::default()
        };
        let client = GitHubClient::with_config("t", &config);
        let err = client.search_issues("repo:o/r", 1, 100).await.unwrap_err();
        match err {
            DomainError::ExecutionFailed(msg) => assert!(msg.contains("search_issues request failed")),
            other => panic!("Expected ExecutionFailed, got {other:?}"),
        }
    }
}
