//! The full check sequence: syntax, MX, disposable domain, typo hints.

mod bulk;
mod types;

#[cfg(feature = "with-parallel")]
pub use bulk::validate_bulk_parallel_with;
pub use bulk::addresses_from_lines;
pub use types::{BulkSummary, ValidationDetails, ValidationResult};

use trust_dns_resolver::Resolver;

use crate::disposable::is_disposable_domain;
use crate::mx::{LookupMx, MxError, MxOptions, MxRecord, check_domain_mx, system_resolver};
use crate::suggest::suggest_corrections;
use crate::validator::{check_syntax, split_address};

/// Runs every check against one address at a time.
///
/// The DNS side is whatever [`LookupMx`] the validator was built with, so
/// tests and callers can swap the system resolver for their own.
#[derive(Debug, Clone)]
pub struct EmailValidator<R = Resolver> {
    resolver: R,
}

impl EmailValidator<Resolver> {
    /// Validator backed by the system DNS configuration.
    pub fn system(options: &MxOptions) -> Result<Self, MxError> {
        Ok(Self::new(system_resolver(options)?))
    }
}

impl<R: LookupMx> EmailValidator<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn validate(&self, email: &str) -> ValidationResult {
        let syntax = check_syntax(email);
        let mut issues = syntax.issues;

        let domain = match split_address(email) {
            Some((_, domain)) if syntax.ok => domain,
            _ => {
                trace_debug!(email, "syntax check failed, skipping DNS");
                return ValidationResult {
                    is_valid: false,
                    email: email.to_string(),
                    issues,
                    suggestions: suggest_corrections(email),
                    validation_details: ValidationDetails::syntax_only(false),
                };
            }
        };

        let mx = check_domain_mx(&self.resolver, domain);
        issues.extend(mx.issues);

        // runs even when the MX check failed
        let disposable = is_disposable_domain(domain);
        if disposable {
            issues.push("Email uses a disposable email service".to_string());
        }

        let suggestions = suggest_corrections(email);
        let is_valid = mx.ok && !disposable;
        trace_debug!(email, is_valid, mx_ok = mx.ok, disposable, "validated");

        ValidationResult {
            is_valid,
            email: email.to_string(),
            issues,
            suggestions,
            validation_details: ValidationDetails {
                syntax_valid: true,
                mx_records_valid: Some(mx.ok),
                is_disposable: Some(disposable),
            },
        }
    }
}

/// Validate one address with the system resolver and default [`MxOptions`].
///
/// Each call reads the system DNS configuration and builds a fresh resolver
/// (with its own Tokio runtime). For repeated checks build one
/// [`EmailValidator::system`] and reuse it.
pub fn validate_email(email: &str) -> ValidationResult {
    EmailValidator::new(SystemOrUnavailable::from_options(&MxOptions::default())).validate(email)
}

/// Validate a list of addresses with the system resolver and default
/// [`MxOptions`]. One result per input, same order.
pub fn validate_bulk<I, S>(emails: I) -> Vec<ValidationResult>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    EmailValidator::new(SystemOrUnavailable::from_options(&MxOptions::default()))
        .validate_bulk(emails)
}

/// Validate a list of addresses concurrently with system resolvers built from
/// `options`.
///
/// The blocking `Resolver` serializes its lookups behind one runtime, so each
/// rayon job gets its own resolver instead of sharing one.
#[cfg(feature = "with-parallel")]
pub fn validate_bulk_concurrent<S>(emails: &[S], options: &MxOptions) -> Vec<ValidationResult>
where
    S: AsRef<str> + Sync,
{
    bulk::validate_bulk_parallel_with(emails, || SystemOrUnavailable::from_options(options))
}

/// Keeps validation infallible when the system resolver cannot be built:
/// every lookup then fails with the initialization error.
pub(crate) enum SystemOrUnavailable {
    System(Box<Resolver>),
    Unavailable(String),
}

impl SystemOrUnavailable {
    pub(crate) fn from_options(options: &MxOptions) -> Self {
        match system_resolver(options) {
            Ok(resolver) => Self::System(Box::new(resolver)),
            Err(err) => {
                trace_warn!(error = %err, "system resolver unavailable");
                Self::Unavailable(err.to_string())
            }
        }
    }
}

impl LookupMx for SystemOrUnavailable {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, MxError> {
        match self {
            Self::System(resolver) => resolver.lookup_mx(domain),
            Self::Unavailable(reason) => Err(MxError::lookup(reason.clone())),
        }
    }
}
