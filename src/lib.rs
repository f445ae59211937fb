#![forbid(unsafe_code)]
//! mailvet — email address checks: syntax, MX records, typo hints, disposable domains.

#[macro_use]
mod macros;

pub mod disposable;
pub mod mx;
pub mod pipeline;
pub mod report;
pub mod suggest;
pub mod validator;

pub use disposable::is_disposable;
pub use mx::{
    LookupMx, MxError, MxOptions, MxRecord, MxStatus, check_domain_mx, check_mx,
    check_mx_with_options, system_resolver,
};
pub use pipeline::{
    BulkSummary, EmailValidator, ValidationDetails, ValidationResult, addresses_from_lines,
    validate_bulk, validate_email,
};
pub use report::{render_human, render_summary, render_verbose_line};
pub use suggest::suggest_corrections;
pub use validator::{CheckReport, check_syntax};
