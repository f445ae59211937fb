//! Plain-text rendering of results, as printed by the CLI.

use crate::pipeline::{BulkSummary, ValidationResult};

/// Full report for one address: verdict, issues, suggestions and the
/// per-check details.
pub fn render_human(result: &ValidationResult) -> String {
    let mut lines = vec![
        format!("Email: {}", result.email),
        format!("Valid: {}", result.is_valid),
    ];

    if !result.issues.is_empty() {
        lines.push(String::new());
        lines.push("Issues:".to_string());
        lines.extend(result.issues.iter().map(|issue| format!("  - {issue}")));
    }

    if !result.suggestions.is_empty() {
        lines.push(String::new());
        lines.push("Suggestions:".to_string());
        lines.extend(result.suggestions.iter().map(|s| format!("  - {s}")));
    }

    lines.push(String::new());
    lines.push("Validation Details:".to_string());
    for (check, passed) in result.validation_details.iter() {
        let mark = if passed { '✓' } else { '✗' };
        lines.push(format!("  {mark} {}", title_case(check)));
    }

    lines.join("\n")
}

pub fn render_summary(summary: &BulkSummary) -> String {
    [
        "Validation Summary:".to_string(),
        format!("Total emails: {}", summary.total),
        format!("Valid emails: {}", summary.valid),
        format!("Invalid emails: {}", summary.invalid),
    ]
    .join("\n")
}

/// One entry of the verbose bulk listing.
pub fn render_verbose_line(result: &ValidationResult) -> String {
    let verdict = if result.is_valid { "VALID" } else { "INVALID" };
    let mut lines = vec![format!("{}: {verdict}", result.email)];
    lines.extend(result.issues.iter().map(|issue| format!("  - {issue}")));
    lines.join("\n")
}

// "mx_records_valid" -> "Mx Records Valid"
fn title_case(check: &str) -> String {
    check
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
