use super::{Error, LookupMx, MxStatus, resolver};
use crate::validator::CheckReport;

/// Run one MX query for `domain` through `resolver` and turn the outcome into
/// a [`CheckReport`]. Resolver failures never escape: they become issues.
pub fn check_domain_mx<R>(resolver: &R, domain: &str) -> CheckReport
where
    R: LookupMx + ?Sized,
{
    let outcome = resolver::normalize_domain(domain)
        .and_then(|domain| resolver::resolve_with(resolver, &domain));

    match outcome {
        Ok(MxStatus::Records(_)) => CheckReport::passed(),
        Ok(MxStatus::NoRecords) => CheckReport::failed("No MX records found for domain"),
        Err(err) => {
            trace_warn!(domain, error = %err, "MX check failed");
            CheckReport::failed(issue_for(&err))
        }
    }
}

fn issue_for(err: &Error) -> String {
    match err {
        Error::NxDomain { .. } => "Domain does not exist".to_string(),
        Error::NoAnswer { .. } => "No MX records found for domain".to_string(),
        Error::Lookup { reason } => format!("DNS lookup failed: {reason}"),
        other => format!("DNS lookup failed: {other}"),
    }
}
