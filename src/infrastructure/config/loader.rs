use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Json, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::MAX_PAGE_SIZE;
use crate::domain::models::Config;

/// Config file read when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "issue-roulette.yaml";

/// Environment variable prefix for overrides (`ROULETTE_OWNER`, `ROULETTE_GITHUB__PAGE_SIZE`, ...)
pub const ENV_PREFIX: &str = "ROULETTE_";

/// Token fallback when none is configured.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Repository owner cannot be empty")]
    EmptyOwner,

    #[error("Repository name cannot be empty")]
    EmptyRepo,

    #[error("A GitHub API token is required when dry_run is false")]
    MissingToken,

    #[error("Invalid assignments: {0}. Must be at least 1")]
    InvalidAssignments(usize),

    #[error("At least one assignee is required")]
    NoAssignees,

    #[error("Assignee handle cannot be empty")]
    EmptyAssignee,

    #[error("Duplicate assignee: {0}")]
    DuplicateAssignee(String),

    #[error("Invalid page_size: {0}. Must be between 1 and 100")]
    InvalidPageSize(u32),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the default file in the working directory.
    ///
    /// Precedence (lowest to highest):
    /// 1. Field defaults
    /// 2. `issue-roulette.yaml` (optional)
    /// 3. Environment variables (ROULETTE_* prefix, `__` for nesting)
    ///
    /// `GITHUB_TOKEN` fills in the token when none of the above set one.
    /// Only the settings every command needs are validated here; see
    /// [`ConfigLoader::validate`] for the checks a run adds.
    pub fn load() -> Result<Config> {
        Self::load_with(None)
    }

    /// Load configuration from a specific file; the file must exist.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        Self::load_with(Some(path.to_path_buf()))
    }

    fn load_with(path: Option<PathBuf>) -> Result<Config> {
        let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        let config = Self::figment(&path)?
            .extract::<Config>()
            .with_context(|| format!("Failed to load config from {}", path.display()))?;

        let config = Self::with_token_fallback(config);
        Self::validate_settings(&config)?;
        Ok(config)
    }

    /// Build the provider stack for `path`. `.json` files use the JSON
    /// provider, anything else is read as YAML.
    ///
    /// The file is extracted on its own first so camelCase keys resolve to
    /// their snake_case fields. That `Config` is then the serialized base
    /// the environment layer merges onto, so both spellings never meet in
    /// one dictionary.
    pub fn figment(path: &Path) -> Result<Figment> {
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let file = if is_json {
            Figment::new().merge(Json::file(path))
        } else {
            Figment::new().merge(Yaml::file(path))
        };
        let file_config: Config = file
            .extract()
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(Figment::new()
            .merge(Serialized::defaults(file_config))
            .merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    fn with_token_fallback(mut config: Config) -> Config {
        if config.github_api_token.is_empty() {
            if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
                config.github_api_token = token;
            }
        }
        config
    }

    /// Validate everything a run depends on: the shared settings plus the
    /// token, the assignee list and the per-assignee count.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        Self::validate_settings(config)?;

        // Dry runs only search, which GitHub allows anonymously.
        if !config.dry_run && config.github_api_token.trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }

        if config.assignments == 0 {
            return Err(ConfigError::InvalidAssignments(config.assignments));
        }

        if config.assignees.is_empty() {
            return Err(ConfigError::NoAssignees);
        }
        let mut seen = HashSet::new();
        for assignee in &config.assignees {
            if assignee.as_str().trim().is_empty() {
                return Err(ConfigError::EmptyAssignee);
            }
            if !seen.insert(assignee.as_str()) {
                return Err(ConfigError::DuplicateAssignee(assignee.to_string()));
            }
        }

        Ok(())
    }

    /// Validate the settings every command relies on: the repository, the
    /// GitHub endpoint and logging.
    pub fn validate_settings(config: &Config) -> Result<(), ConfigError> {
        if config.owner.trim().is_empty() {
            return Err(ConfigError::EmptyOwner);
        }
        if config.repo.trim().is_empty() {
            return Err(ConfigError::EmptyRepo);
        }

        if config.github.page_size == 0 || config.github.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::InvalidPageSize(config.github.page_size));
        }

        if config.github.api_url.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "github.api_url cannot be empty".to_string(),
            ));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        Ok(())
    }
}
