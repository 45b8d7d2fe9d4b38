//! Implementation of the `issue-roulette run` command.

use std::collections::BTreeSet;
use std::sync::Arc;

use anyhow::{Context, Result};
use console::{style, Term};
use serde::Serialize;

use crate::adapters::GitHubClient;
use crate::cli::output::{create_spinner, format_assignment_table, output, CommandOutput, ProgressBarExt};
use crate::cli::types::RunArgs;
use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;
use crate::services::{Roulette, RunOutcome};

#[derive(Debug, Serialize)]
pub struct RunOutput {
    pub repo: String,
    #[serde(flatten)]
    pub outcome: RunOutcome,
}

impl CommandOutput for RunOutput {
    fn to_human(&self) -> String {
        match &self.outcome {
            RunOutcome::NotEnoughIssues { found, needed } => format!(
                "Not enough open issues in {} for issue roulette! Congratulations!\n(found {found}, need {needed})",
                self.repo
            ),
            RunOutcome::Completed(report) => {
                let assignees: BTreeSet<&str> = report
                    .assignments
                    .iter()
                    .map(|a| a.assignee.as_str())
                    .collect();
                let mut lines = vec![
                    format_assignment_table(&report.assignments),
                    format!(
                        "\nDealt {} of {} issue(s) in {} to {} assignee(s)",
                        style(report.assignments.len()).bold(),
                        report.found,
                        self.repo,
                        assignees.len()
                    ),
                ];
                if report.dry_run {
                    lines.push(format!(
                        "{} nothing was written ({} write(s) skipped)",
                        style("Dry run:").yellow().bold(),
                        report.dispatch.attempted
                    ));
                } else {
                    lines.push(format!(
                        "{} of {} write(s) succeeded",
                        report.dispatch.succeeded, report.dispatch.attempted
                    ));
                }
                for failure in &report.dispatch.failures {
                    lines.push(format!(
                        "  {} #{} {} ({}): {}",
                        style("✗").red(),
                        failure.issue,
                        failure.action,
                        failure.assignee,
                        failure.error
                    ));
                }
                lines.join("\n")
            }
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(mut config: Config, args: &RunArgs, json_mode: bool) -> Result<()> {
    args.apply(&mut config);
    ConfigLoader::validate(&config).context("Invalid configuration after command-line overrides")?;

    let repo = config.repo_slug();
    let client = Arc::new(GitHubClient::with_config(
        config.github_api_token.clone(),
        &config.github,
    ));
    let spinner = create_spinner(!json_mode && Term::stderr().is_term());
    let roulette =
        Roulette::for_github(config, client).map_source(|source| source.with_progress(spinner.clone()));

    let outcome = match roulette.run().await {
        Ok(outcome) => {
            spinner.finish_and_clear();
            outcome
        }
        Err(err) => {
            spinner.finish_error("issue fetch failed");
            return Err(err).with_context(|| format!("Issue roulette failed for {repo}"));
        }
    };

    output(&RunOutput { repo, outcome }, json_mode);
    Ok(())
}
