use super::{Error, LookupMx, MxRecord, MxStatus, check_domain_mx, resolver};

type LookupResult = Result<Vec<MxRecord>, Error>;
type LookupFn = dyn Fn(&str) -> LookupResult;

pub(crate) struct StubResolver {
    pub on_lookup: Box<LookupFn>,
}

impl StubResolver {
    fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> LookupResult + 'static,
    {
        Self {
            on_lookup: Box::new(f),
        }
    }
}

impl LookupMx for StubResolver {
    fn lookup_mx(&self, domain: &str) -> LookupResult {
        (self.on_lookup)(domain)
    }
}

#[test]
fn normalize_domain_rejects_empty() {
    let err = resolver::normalize_domain("  ").expect_err("empty domain should fail");
    assert!(matches!(err, Error::EmptyDomain));
}

#[test]
fn resolve_with_sorts_and_dedups_records() {
    let stub = StubResolver::new(|domain| {
        assert_eq!(domain, "example.com");
        Ok(vec![
            MxRecord::new(20, "mx2.example.com"),
            MxRecord::new(10, "mx1.example.com"),
            MxRecord::new(10, "mx1.example.com"),
            MxRecord::new(30, "mx3.example.com"),
        ])
    });

    let status = resolver::resolve_with(&stub, "example.com").expect("lookup succeeds");
    let records = match status {
        MxStatus::Records(records) => records,
        MxStatus::NoRecords => panic!("expected records"),
    };
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].preference, 10);
    assert_eq!(records[0].exchange, "mx1.example.com");
    assert_eq!(records[2].preference, 30);
}

#[test]
fn resolve_with_handles_no_records() {
    let stub = StubResolver::new(|_| Ok(Vec::new()));

    let status = resolver::resolve_with(&stub, "example.com").expect("lookup succeeds");
    assert!(matches!(status, MxStatus::NoRecords));
    assert!(!status.has_records());
}

#[test]
fn normalize_exchange_trims_dot_and_lowercases() {
    let out = resolver::normalize_exchange("Mail.EXAMPLE.com.".to_string());
    assert_eq!(out, "mail.example.com");
}

#[test]
fn check_passes_with_records() {
    let stub = StubResolver::new(|_| Ok(vec![MxRecord::new(10, "mx.example.com")]));
    let report = check_domain_mx(&stub, "example.com");
    assert!(report.ok);
    assert!(report.issues.is_empty());
}

#[test]
fn check_reports_empty_answer() {
    let stub = StubResolver::new(|_| Ok(Vec::new()));
    let report = check_domain_mx(&stub, "example.com");
    assert!(!report.ok);
    assert_eq!(report.issues, vec!["No MX records found for domain"]);
}

#[test]
fn check_reports_nxdomain() {
    let stub = StubResolver::new(|domain| Err(Error::nx_domain(domain)));
    let report = check_domain_mx(&stub, "nope.invalid");
    assert!(!report.ok);
    assert_eq!(report.issues, vec!["Domain does not exist"]);
}

#[test]
fn check_reports_no_answer() {
    let stub = StubResolver::new(|domain| Err(Error::no_answer(domain)));
    let report = check_domain_mx(&stub, "example.com");
    assert_eq!(report.issues, vec!["No MX records found for domain"]);
}

#[test]
fn check_reports_other_failures() {
    let stub = StubResolver::new(|_| Err(Error::lookup("request timed out")));
    let report = check_domain_mx(&stub, "example.com");
    assert!(!report.ok);
    assert_eq!(report.issues, vec!["DNS lookup failed: request timed out"]);
}

#[test]
fn check_skips_lookup_for_blank_domain() {
    let stub = StubResolver::new(|_| panic!("resolver must not be called"));
    let report = check_domain_mx(&stub, " ");
    assert_eq!(report.issues, vec!["DNS lookup failed: domain is empty"]);
}

#[test]
fn boxed_resolver_is_usable() {
    let boxed: Box<dyn LookupMx> =
        Box::new(StubResolver::new(|_| Ok(vec![MxRecord::new(5, "mx.example.com")])));
    assert!(check_domain_mx(&boxed, "example.com").ok);
}
