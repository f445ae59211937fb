use thiserror::Error;
use trust_dns_resolver::{
    error::{ResolveError, ResolveErrorKind},
    proto::op::ResponseCode,
};

#[derive(Debug, Error)]
pub enum MxError {
    #[error("domain is empty")]
    EmptyDomain,
    #[error("domain {domain} does not exist")]
    NxDomain { domain: String },
    #[error("domain {domain} has no MX records")]
    NoAnswer { domain: String },
    #[error("resolver initialization failed: {source}")]
    ResolverInit {
        #[source]
        source: std::io::Error,
    },
    #[error("{reason}")]
    Lookup { reason: String },
}

impl MxError {
    pub(crate) fn resolver_init(source: std::io::Error) -> Self {
        Self::ResolverInit { source }
    }

    pub fn lookup(reason: impl Into<String>) -> Self {
        Self::Lookup {
            reason: reason.into(),
        }
    }

    pub fn nx_domain(domain: impl Into<String>) -> Self {
        Self::NxDomain {
            domain: domain.into(),
        }
    }

    pub fn no_answer(domain: impl Into<String>) -> Self {
        Self::NoAnswer {
            domain: domain.into(),
        }
    }

    /// Sort a resolver failure into "domain missing", "no MX" or anything else.
    pub(crate) fn from_resolve(domain: &str, err: ResolveError) -> Self {
        match err.kind() {
            ResolveErrorKind::NoRecordsFound { response_code, .. }
                if *response_code == ResponseCode::NXDomain =>
            {
                Self::nx_domain(domain)
            }
            ResolveErrorKind::NoRecordsFound { .. } => Self::no_answer(domain),
            _ => Self::lookup(err.to_string()),
        }
    }
}
