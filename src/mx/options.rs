use std::time::Duration;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

/// Resolver knobs used for MX lookups.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxOptions {
    /// Per-query timeout. Zero keeps the system resolver's own timeout.
    pub timeout_ms: u64,
    /// Number of attempts per query. Zero keeps the system default.
    pub attempts: usize,
}

impl Default for MxOptions {
    fn default() -> Self {
        Self {
            timeout_ms: 5_000,
            attempts: 2,
        }
    }
}

impl MxOptions {
    pub fn timeout(&self) -> Option<Duration> {
        if self.timeout_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.timeout_ms))
        }
    }

    pub fn attempts(&self) -> Option<usize> {
        if self.attempts == 0 {
            None
        } else {
            Some(self.attempts)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_bounded() {
        let opts = MxOptions::default();
        assert_eq!(opts.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(opts.attempts(), Some(2));
    }

    #[test]
    fn zero_means_system_default() {
        let opts = MxOptions {
            timeout_ms: 0,
            attempts: 0,
        };
        assert_eq!(opts.timeout(), None);
        assert_eq!(opts.attempts(), None);
    }
}
