//! Syntax checks on a single address.

mod domain;
mod local;
mod types;

pub use types::CheckReport;

use std::sync::LazyLock;

use regex::Regex;

use domain::check_domain;
use local::check_local;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Check the structure of `email`.
///
/// Surrounding whitespace is ignored. Input-shape failures (empty, no `@`,
/// several `@`) stop the check immediately; local part and domain rules are
/// then all evaluated, and the final pattern only runs if nothing was flagged.
pub fn check_syntax(email: &str) -> CheckReport {
    let input = email.trim();

    if input.is_empty() {
        return CheckReport::failed("Email cannot be empty or non-string");
    }

    match input.matches('@').count() {
        0 => return CheckReport::failed("Missing @ symbol"),
        1 => {}
        _ => return CheckReport::failed("Multiple @ symbols found"),
    }

    let Some((local, domain)) = input.split_once('@') else {
        return CheckReport::failed("Missing @ symbol");
    };

    let mut issues = Vec::new();
    check_local(local, &mut issues);
    check_domain(domain, &mut issues);

    if issues.is_empty() && !EMAIL_PATTERN.is_match(input) {
        issues.push("Email format doesn't match RFC standards".to_string());
    }

    CheckReport::from_issues(issues)
}

/// Split a trimmed address at its first `@`.
pub(crate) fn split_address(email: &str) -> Option<(&str, &str)> {
    email.trim().split_once('@')
}
