const MAX_LOCAL_LEN: usize = 64;

/// Local part rules: non-empty, at most 64 chars, no leading/trailing dot, no "..".
/// Each failing rule pushes one issue.
pub(crate) fn check_local(local: &str, issues: &mut Vec<String>) {
    if local.is_empty() {
        issues.push("Missing local part (before @)".to_string());
    }
    if local.chars().count() > MAX_LOCAL_LEN {
        issues.push(format!(
            "Local part too long (max {MAX_LOCAL_LEN} characters)"
        ));
    }
    if local.starts_with('.') || local.ends_with('.') {
        issues.push("Local part cannot start or end with dot".to_string());
    }
    if local.contains("..") {
        issues.push("Consecutive dots not allowed in local part".to_string());
    }
}
