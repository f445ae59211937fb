//! Typo hints for well-known mail providers.

use phf::phf_map;

use crate::validator::split_address;

/// Misspelled domain → intended domain. Keys are lower case.
const DOMAIN_CORRECTIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "gmial.com" => "gmail.com",
    "gmai.com" => "gmail.com",
    "yahooo.com" => "yahoo.com",
    "hotmial.com" => "hotmail.com",
    "outlok.com" => "outlook.com",
    "iclod.com" => "icloud.com",
};

/// Return the corrected domain for a known misspelling, if any.
pub fn corrected_domain(domain: &str) -> Option<&'static str> {
    DOMAIN_CORRECTIONS
        .get(domain.to_ascii_lowercase().as_str())
        .copied()
}

/// Suggest a corrected address when the domain is a known typo.
///
/// Only an exact (case-insensitive) match on the domain counts; the local
/// part is kept as written.
pub fn suggest_corrections(email: &str) -> Vec<String> {
    let Some((local, domain)) = split_address(email) else {
        return Vec::new();
    };

    match corrected_domain(domain) {
        Some(corrected) => vec![format!("Did you mean: {local}@{corrected}?")],
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_typos() {
        assert_eq!(
            suggest_corrections("test@gmial.com"),
            vec!["Did you mean: test@gmail.com?"]
        );
        assert_eq!(
            suggest_corrections("user@yahooo.com"),
            vec!["Did you mean: user@yahoo.com?"]
        );
        assert_eq!(
            suggest_corrections("admin@hotmial.com"),
            vec!["Did you mean: admin@hotmail.com?"]
        );
    }

    #[test]
    fn domain_match_is_case_insensitive_local_kept() {
        assert_eq!(
            suggest_corrections("John.Doe@OutLok.COM"),
            vec!["Did you mean: John.Doe@outlook.com?"]
        );
    }

    #[test]
    fn no_fuzzy_matching() {
        assert!(suggest_corrections("a@gmaill.com").is_empty());
        assert!(suggest_corrections("a@mail.gmial.com").is_empty());
        assert!(suggest_corrections("a@gmail.com").is_empty());
    }

    #[test]
    fn needs_an_at_sign() {
        assert!(suggest_corrections("gmial.com").is_empty());
        assert!(suggest_corrections("").is_empty());
    }

    #[test]
    fn works_on_syntactically_invalid_input() {
        assert_eq!(
            suggest_corrections(".test@iclod.com"),
            vec!["Did you mean: .test@icloud.com?"]
        );
    }
}
