/// Per-check outcomes, in execution order.
///
/// `syntax_valid` is always present; the MX and disposable entries only exist
/// once the address passed the syntax check.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationDetails {
    pub syntax_valid: bool,
    #[cfg_attr(
        feature = "with-serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub mx_records_valid: Option<bool>,
    #[cfg_attr(
        feature = "with-serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub is_disposable: Option<bool>,
}

impl ValidationDetails {
    pub const SYNTAX_VALID: &'static str = "syntax_valid";
    pub const MX_RECORDS_VALID: &'static str = "mx_records_valid";
    pub const IS_DISPOSABLE: &'static str = "is_disposable";

    pub(crate) fn syntax_only(syntax_valid: bool) -> Self {
        Self {
            syntax_valid,
            mx_records_valid: None,
            is_disposable: None,
        }
    }

    pub fn get(&self, check: &str) -> Option<bool> {
        match check {
            Self::SYNTAX_VALID => Some(self.syntax_valid),
            Self::MX_RECORDS_VALID => self.mx_records_valid,
            Self::IS_DISPOSABLE => self.is_disposable,
            _ => None,
        }
    }

    pub fn contains(&self, check: &str) -> bool {
        self.get(check).is_some()
    }

    /// Present entries as `(check name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> {
        [
            (Self::SYNTAX_VALID, Some(self.syntax_valid)),
            (Self::MX_RECORDS_VALID, self.mx_records_valid),
            (Self::IS_DISPOSABLE, self.is_disposable),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Input exactly as given, untrimmed.
    pub email: String,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
    pub validation_details: ValidationDetails,
}

/// Counts over a batch of results.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BulkSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}

impl BulkSummary {
    pub fn from_results(results: &[ValidationResult]) -> Self {
        let valid = results.iter().filter(|r| r.is_valid).count();
        Self {
            total: results.len(),
            valid,
            invalid: results.len() - valid,
        }
    }
}
