use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::issue::Assignee;

/// Comment posted on every assigned issue. `{assignee}` is replaced by the handle.
pub const DEFAULT_COMMENT_TEMPLATE: &str = "@{assignee} please close or schedule before the end of this sprint. See [triaging old issues](https://github.com/medic/medic-docs/blob/master/md/dev/workflow.md#triaging-old-issues). ";

/// Largest page the GitHub search endpoint will serve.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Configuration for a single roulette run.
///
/// Loaded once at startup and never mutated afterwards. The camelCase
/// aliases accept the key names of the older `config.json` layout.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Repository owner (user or organisation).
    #[serde(default)]
    pub owner: String,

    /// Repository name.
    #[serde(default)]
    pub repo: String,

    /// Token sent as a bearer credential to the GitHub API.
    #[serde(default, alias = "githubApiToken")]
    pub github_api_token: String,

    /// Number of issues each assignee receives.
    #[serde(default = "default_assignments")]
    pub assignments: usize,

    /// Upper bound on how many of the oldest issues are pulled (None = all).
    #[serde(default, alias = "issuesToPullFrom")]
    pub issues_to_pull_from: Option<usize>,

    /// People receiving issues, in the order they are served.
    #[serde(default)]
    pub assignees: Vec<Assignee>,

    /// Extra search qualifiers appended to the untriaged-issue query.
    #[serde(default, alias = "additionalQueryParams")]
    pub additional_query_params: String,

    /// Labels added to each assigned issue.
    #[serde(default, alias = "labelsToAdd")]
    pub labels_to_add: Vec<String>,

    /// When set, writes are logged instead of sent.
    #[serde(default = "default_dry_run", alias = "dryRun")]
    pub dry_run: bool,

    /// Comment body template, `{assignee}` is substituted.
    #[serde(default = "default_comment_template", alias = "commentTemplate")]
    pub comment_template: String,

    /// GitHub API settings
    #[serde(default)]
    pub github: GitHubConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

const fn default_assignments() -> usize {
    1
}

const fn default_dry_run() -> bool {
    true
}

fn default_comment_template() -> String {
    DEFAULT_COMMENT_TEMPLATE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            owner: String::new(),
            repo: String::new(),
            github_api_token: String::new(),
            assignments: default_assignments(),
            issues_to_pull_from: None,
            assignees: vec![],
            additional_query_params: String::new(),
            labels_to_add: vec![],
            dry_run: default_dry_run(),
            comment_template: default_comment_template(),
            github: GitHubConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Number of issues needed to serve every assignee.
    pub fn issues_needed(&self) -> usize {
        self.assignees.len().saturating_mul(self.assignments)
    }

    /// `owner/repo`, as used in search qualifiers and log lines.
    pub fn repo_slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// Copy of this config that is safe to print.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if !copy.github_api_token.is_empty() {
            copy.github_api_token = "[REDACTED]".to_string();
        }
        copy
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("github_api_token", &"[REDACTED]")
            .field("assignments", &self.assignments)
            .field("issues_to_pull_from", &self.issues_to_pull_from)
            .field("assignees", &self.assignees)
            .field("additional_query_params", &self.additional_query_params)
            .field("labels_to_add", &self.labels_to_add)
            .field("dry_run", &self.dry_run)
            .field("comment_template", &self.comment_template)
            .field("github", &self.github)
            .field("logging", &self.logging)
            .finish()
    }
}

/// GitHub API endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GitHubConfig {
    /// Base URL of the REST API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// `User-Agent` header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Search results requested per page (1-100)
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_user_agent() -> String {
    "github-issue-roulette".to_string()
}

const fn default_page_size() -> u32 {
    MAX_PAGE_SIZE
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            user_agent: default_user_agent(),
            page_size: default_page_size(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Console format
    #[serde(default)]
    pub format: LogFormat,

    /// Directory for a JSON log file (optional, console only when absent)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            log_dir: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}
