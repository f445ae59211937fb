const MAX_DOMAIN_LEN: usize = 253;

/// Domain rules. An empty domain only reports that it is missing; otherwise
/// every rule is evaluated and pushes its own issue.
pub(crate) fn check_domain(domain: &str, issues: &mut Vec<String>) {
    if domain.is_empty() {
        issues.push("Missing domain part (after @)".to_string());
        return;
    }

    if domain.chars().count() > MAX_DOMAIN_LEN {
        issues.push(format!(
            "Domain too long (max {MAX_DOMAIN_LEN} characters)"
        ));
    }
    if !domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        issues.push("Domain contains invalid characters".to_string());
    }
    if domain.starts_with('.') || domain.ends_with('.') {
        issues.push("Domain cannot start or end with dot".to_string());
    }
    if domain.contains("..") {
        issues.push("Consecutive dots not allowed in domain".to_string());
    }
    if !domain.contains('.') {
        issues.push("Domain must contain at least one dot".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issues_for(domain: &str) -> Vec<String> {
        let mut issues = vec![];
        check_domain(domain, &mut issues);
        issues
    }

    #[test]
    fn basic_domain_ok() {
        let issues = issues_for("mail.example.co.uk");
        assert!(issues.is_empty(), "{:?}", issues);
    }

    #[test]
    fn empty_domain_short_circuits() {
        assert_eq!(issues_for(""), vec!["Missing domain part (after @)"]);
    }

    #[test]
    fn missing_dot() {
        assert_eq!(
            issues_for("localhost"),
            vec!["Domain must contain at least one dot"]
        );
    }

    #[test]
    fn invalid_chars() {
        let issues = issues_for("ex_ample.com");
        assert_eq!(issues, vec!["Domain contains invalid characters"]);
    }

    #[test]
    fn too_long() {
        let long = format!("{}.com", "a".repeat(250));
        let issues = issues_for(&long);
        assert_eq!(issues, vec!["Domain too long (max 253 characters)"]);
    }

    #[test]
    fn dot_placement() {
        assert_eq!(
            issues_for(".example.com"),
            vec!["Domain cannot start or end with dot"]
        );
        assert_eq!(
            issues_for("example..com"),
            vec!["Consecutive dots not allowed in domain"]
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 134 chars, 264 bytes: only the character rule fires
        let domain = format!("{}.com", "é".repeat(130));
        assert_eq!(
            issues_for(&domain),
            vec!["Domain contains invalid characters"]
        );
    }
}
