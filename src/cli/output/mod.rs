//! CLI output formatting module
//!
//! Human output renders tables with comfy-table; `--json` prints the
//! serialized result instead.

pub mod progress;
pub mod table;

use serde::Serialize;

pub use progress::{create_spinner, ProgressBarExt};
pub use table::{format_assignment_table, format_issue_table};

/// Trait for types that can be rendered as human-readable or JSON output.
pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;
    fn to_json(&self) -> serde_json::Value;
}

/// Dispatch output based on JSON mode flag.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
        );
    } else {
        println!("{}", result.to_human());
    }
}

/// Truncate a string to at most `max_len` characters, appending "..." if truncated.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
