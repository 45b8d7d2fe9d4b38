//! Spinner shown on stderr while pages are being fetched.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const SPINNER_TEMPLATE: &str = "[{elapsed_precise}] {spinner:.green} {msg}";
const SPINNER_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Create a spinner for indeterminate operations.
///
/// The spinner is hidden when `visible` is false (JSON mode, or stderr
/// is not a terminal), so callers can use it unconditionally.
pub fn create_spinner(visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template(SPINNER_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars(SPINNER_CHARS);
    spinner.set_style(style);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Extension trait for ProgressBar to add common utility methods
pub trait ProgressBarExt {
    /// Finish with an error message (red X)
    fn finish_error(&self, message: impl Into<String>);
}

impl ProgressBarExt for ProgressBar {
    fn finish_error(&self, message: impl Into<String>) {
        self.finish_with_message(format!("✗ {}", message.into()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_spinner() {
        let spinner = create_spinner(false);
        assert!(spinner.is_hidden());
        spinner.set_message("Fetching 0-100 issues…");
        spinner.finish_error("issue fetch failed");
        assert!(spinner.is_finished());
    }
}
