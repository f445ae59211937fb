//! DNS MX checks.
//!
//! [`check_domain_mx`] runs one lookup through any [`LookupMx`] implementation
//! and reports the outcome as issues. [`check_mx`] performs a synchronous
//! lookup with the system resolver and returns the records themselves.

mod check;
mod error;
mod options;
mod resolver;
mod types;

pub use check::check_domain_mx;
pub use error::MxError;
pub(crate) use error::MxError as Error;
pub use options::MxOptions;
pub use resolver::{LookupMx, check_mx, check_mx_with_options, system_resolver};
pub use types::{MxRecord, MxStatus};

#[cfg(test)]
mod tests;
