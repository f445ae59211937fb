use super::{EmailValidator, ValidationResult};
use crate::mx::LookupMx;

impl<R: LookupMx> EmailValidator<R> {
    /// Validate each address in turn. Output order matches input order and
    /// duplicates are validated again.
    pub fn validate_bulk<I, S>(&self, emails: I) -> Vec<ValidationResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        emails
            .into_iter()
            .map(|email| self.validate(email.as_ref()))
            .collect()
    }

    /// Same as [`validate_bulk`](Self::validate_bulk), but spreads the work
    /// over the rayon thread pool. Results keep the input order.
    ///
    /// All workers share `self.resolver`, so this only overlaps lookups when
    /// the resolver itself allows concurrent calls. The blocking system
    /// `Resolver` does not; use [`validate_bulk_parallel_with`] for it.
    #[cfg(feature = "with-parallel")]
    pub fn validate_bulk_parallel<S>(&self, emails: &[S]) -> Vec<ValidationResult>
    where
        R: Sync,
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        emails
            .par_iter()
            .map(|email| self.validate(email.as_ref()))
            .collect()
    }
}

/// Concurrent bulk run where every rayon job builds its own resolver with
/// `make_resolver`. Results keep the input order.
#[cfg(feature = "with-parallel")]
pub fn validate_bulk_parallel_with<S, R, F>(
    emails: &[S],
    make_resolver: F,
) -> Vec<ValidationResult>
where
    S: AsRef<str> + Sync,
    R: LookupMx,
    F: Fn() -> R + Sync + Send,
{
    use rayon::prelude::*;

    emails
        .par_iter()
        .map_init(
            || EmailValidator::new(make_resolver()),
            |validator, email| validator.validate(email.as_ref()),
        )
        .collect()
}

/// Newline-delimited address list: lines are trimmed, blank lines dropped.
pub fn addresses_from_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_trimmed_and_blanks_skipped() {
        let text = "  a@example.com\r\n\n\t\nb@example.com  \n";
        assert_eq!(
            addresses_from_lines(text),
            vec!["a@example.com", "b@example.com"]
        );
    }

    #[test]
    fn empty_text_gives_nothing() {
        assert!(addresses_from_lines("").is_empty());
        assert!(addresses_from_lines("\n \n").is_empty());
    }
}
