//! Disposable (throwaway) mail providers.

use phf::phf_set;

use crate::validator::split_address;

const DISPOSABLE_DOMAINS: phf::Set<&'static str> = phf_set! {
    "10minutemail.com",
    "tempmail.org",
    "guerrillamail.com",
    "mailinator.com",
    "throwaway.email",
};

/// `true` when the domain of `email` is a known disposable provider.
/// Exact domain match only: subdomains are not covered.
pub fn is_disposable(email: &str) -> bool {
    match split_address(email) {
        Some((_, domain)) => is_disposable_domain(domain),
        None => false,
    }
}

pub fn is_disposable_domain(domain: &str) -> bool {
    DISPOSABLE_DOMAINS.contains(domain.to_ascii_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_known_providers() {
        for email in [
            "test@10minutemail.com",
            "user@tempmail.org",
            "admin@guerrillamail.com",
            "x@MAILINATOR.com",
            "y@throwaway.email",
        ] {
            assert!(is_disposable(email), "{email} should be disposable");
        }
    }

    #[test]
    fn ignores_regular_and_subdomains() {
        assert!(!is_disposable("user@gmail.com"));
        assert!(!is_disposable("user@eu.mailinator.com"));
        assert!(!is_disposable("mailinator.com"));
    }
}
