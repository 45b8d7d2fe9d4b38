//! Issue, assignee and assignment models.
//!
//! Issues are read-only snapshots of what the tracker returned; nothing
//! here is persisted between runs.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A ticket returned by the issue tracker's search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Sequential number within the repository (e.g., 42 → "#42").
    pub number: u64,
    /// Issue title.
    pub title: String,
    /// URL to view the issue in the tracker UI.
    pub html_url: String,
    /// Timestamp of the last update.
    pub updated_at: DateTime<Utc>,
}

/// Handle of a person who can receive issues.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignee(String);

impl Assignee {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Assignee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Assignee {
    fn from(handle: &str) -> Self {
        Self::new(handle)
    }
}

impl From<String> for Assignee {
    fn from(handle: String) -> Self {
        Self(handle)
    }
}

/// One issue handed to one assignee for this run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub assignee: Assignee,
    pub issue: Issue,
}

impl Assignment {
    pub fn new(assignee: Assignee, issue: Issue) -> Self {
        Self { assignee, issue }
    }
}

/// The three writes performed for every assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteAction {
    Comment,
    Assign,
    AddLabels,
}

impl fmt::Display for WriteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Comment => "comment",
            Self::Assign => "assign",
            Self::AddLabels => "add_labels",
        };
        f.write_str(name)
    }
}
