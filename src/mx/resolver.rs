use trust_dns_resolver::{Resolver, system_conf::read_system_conf};

use super::{Error, MxOptions, MxRecord, MxStatus};

/// Lookup MX records for `domain` using the system resolver and default
/// [`MxOptions`].
///
/// The resulting [`MxStatus`] contains the sorted list of records (ascending
/// preference).
pub fn check_mx(domain: &str) -> Result<MxStatus, Error> {
    check_mx_with_options(domain, &MxOptions::default())
}

pub fn check_mx_with_options(domain: &str, options: &MxOptions) -> Result<MxStatus, Error> {
    let domain = normalize_domain(domain)?;
    let resolver = system_resolver(options)?;
    resolve_with(&resolver, &domain)
}

/// Build a resolver from the system configuration, with the timeout and
/// attempt count taken from `options`.
pub fn system_resolver(options: &MxOptions) -> Result<Resolver, Error> {
    let (config, mut opts) = read_system_conf().map_err(Error::resolver_init)?;
    if let Some(timeout) = options.timeout() {
        opts.timeout = timeout;
    }
    if let Some(attempts) = options.attempts() {
        opts.attempts = attempts;
    }
    Resolver::new(config, opts).map_err(Error::resolver_init)
}

pub(crate) fn resolve_with<R>(resolver: &R, domain: &str) -> Result<MxStatus, Error>
where
    R: LookupMx + ?Sized,
{
    let mut records = resolver.lookup_mx(domain)?;

    records.sort();
    records.dedup();

    if records.is_empty() {
        Ok(MxStatus::NoRecords)
    } else {
        Ok(MxStatus::Records(records))
    }
}

pub(crate) fn normalize_domain(domain: &str) -> Result<String, Error> {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyDomain);
    }
    Ok(trimmed.to_string())
}

pub(crate) fn normalize_exchange(exchange: String) -> String {
    let trimmed = exchange.trim_end_matches('.');
    trimmed.to_ascii_lowercase()
}

/// DNS capability used by the MX check.
///
/// Implementations must report a non-existent domain as [`Error::NxDomain`]
/// and an existing domain without MX data as [`Error::NoAnswer`] (or an empty
/// list); anything else is treated as a lookup failure.
pub trait LookupMx {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, Error>;
}

impl<T: LookupMx + ?Sized> LookupMx for &T {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, Error> {
        (**self).lookup_mx(domain)
    }
}

impl<T: LookupMx + ?Sized> LookupMx for Box<T> {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, Error> {
        (**self).lookup_mx(domain)
    }
}

impl LookupMx for Resolver {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, Error> {
        trace_debug!(domain, "MX lookup");
        let lookup =
            Resolver::mx_lookup(self, domain).map_err(|err| Error::from_resolve(domain, err))?;
        let mut records = Vec::new();
        for mx in lookup.iter() {
            let exchange = normalize_exchange(mx.exchange().to_utf8());
            records.push(MxRecord::new(mx.preference(), exchange));
        }
        trace_debug!(domain, count = records.len(), "MX lookup answered");
        Ok(records)
    }
}
