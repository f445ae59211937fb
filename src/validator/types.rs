/// Outcome of a single check: `ok` plus the human-readable issues it raised.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckReport {
    pub ok: bool,
    pub issues: Vec<String>,
}

impl CheckReport {
    pub fn passed() -> Self {
        Self {
            ok: true,
            issues: Vec::new(),
        }
    }

    pub fn failed(issue: impl Into<String>) -> Self {
        Self {
            ok: false,
            issues: vec![issue.into()],
        }
    }

    pub(crate) fn from_issues(issues: Vec<String>) -> Self {
        Self {
            ok: issues.is_empty(),
            issues,
        }
    }
}
