//! Table output for issues and assignments using comfy-table.

use comfy_table::{presets, Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::domain::models::{Assignment, Issue};

use super::truncate;

const TITLE_WIDTH: usize = 50;

fn list_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.iter().map(|h| {
            Cell::new(h)
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Left)
        }));
    table
}

/// Format fetched issues, oldest first.
pub fn format_issue_table(issues: &[Issue]) -> String {
    let mut table = list_table(&["#", "Title", "Last updated", "URL"]);
    for issue in issues {
        table.add_row(vec![
            Cell::new(issue.number).set_alignment(CellAlignment::Right),
            Cell::new(truncate(&issue.title, TITLE_WIDTH)),
            Cell::new(issue.updated_at.format("%Y-%m-%d")),
            Cell::new(&issue.html_url),
        ]);
    }
    table.to_string()
}

/// Format the assignment plan, grouped by assignee.
pub fn format_assignment_table(assignments: &[Assignment]) -> String {
    let mut table = list_table(&["Assignee", "#", "Title", "Last updated", "URL"]);
    for assignment in assignments {
        let issue = &assignment.issue;
        table.add_row(vec![
            Cell::new(&assignment.assignee),
            Cell::new(issue.number).set_alignment(CellAlignment::Right),
            Cell::new(truncate(&issue.title, TITLE_WIDTH)),
            Cell::new(issue.updated_at.format("%Y-%m-%d")),
            Cell::new(&issue.html_url),
        ]);
    }
    table.to_string()
}
