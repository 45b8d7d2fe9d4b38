//! Implementation of the `issue-roulette list` command.

use std::sync::Arc;

use anyhow::{Context, Result};
use console::Term;
use serde::Serialize;

use crate::adapters::GitHubClient;
use crate::cli::output::{create_spinner, format_issue_table, output, CommandOutput, ProgressBarExt};
use crate::cli::types::ListArgs;
use crate::domain::models::{Config, Issue};
use crate::services::{build_search_query, IssueSource};

#[derive(Debug, Serialize)]
pub struct ListOutput {
    pub repo: String,
    pub query: String,
    pub issues: Vec<Issue>,
}

impl CommandOutput for ListOutput {
    fn to_human(&self) -> String {
        if self.issues.is_empty() {
            return format!("No untriaged issues found in {}.", self.repo);
        }
        format!(
            "{} untriaged issue(s) in {}, oldest first:\n{}",
            self.issues.len(),
            self.repo,
            format_issue_table(&self.issues)
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(config: Config, args: &ListArgs, json_mode: bool) -> Result<()> {
    let repo = config.repo_slug();
    let query = build_search_query(&config.owner, &config.repo, &config.additional_query_params);
    let client = Arc::new(GitHubClient::with_config(
        config.github_api_token.clone(),
        &config.github,
    ));

    let spinner = create_spinner(!json_mode && Term::stderr().is_term());
    let source = IssueSource::new(client, query.clone())
        .with_page_size(config.github.page_size)
        .with_progress(spinner.clone());

    let limit = args.limit.or(config.issues_to_pull_from);
    let issues = match source.fetch_oldest(limit).await {
        Ok(issues) => {
            spinner.finish_and_clear();
            issues
        }
        Err(err) => {
            spinner.finish_error("issue fetch failed");
            return Err(err).with_context(|| format!("Failed to list issues in {repo}"));
        }
    };

    output(&ListOutput { repo, query, issues }, json_mode);
    Ok(())
}
