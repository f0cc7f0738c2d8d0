// SPDX-License-Identifier: MIT
//! Merge configuration

use std::fmt;
use std::str::FromStr;

/// What to do when an extra movie cannot be imported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Fail the whole merge; the caller's base movie is left untouched
    #[default]
    Abort,

    /// Log the error and merge the remaining extras
    SkipDocument,
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(FailurePolicy::Abort),
            "skip" | "skip-document" => Ok(FailurePolicy::SkipDocument),
            other => Err(format!(
                "Unknown failure policy '{}': expected 'abort' or 'skip'",
                other
            )),
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::Abort => write!(f, "abort"),
            FailurePolicy::SkipDocument => write!(f, "skip"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MergeConfig {
    pub failure_policy: FailurePolicy,
}

impl MergeConfig {
    pub fn new(failure_policy: FailurePolicy) -> Self {
        Self { failure_policy }
    }

    /// Load from `SWF_MERGE_FAILURE_POLICY`, falling back to the default
    pub fn from_env() -> Result<Self, String> {
        let failure_policy = match std::env::var("SWF_MERGE_FAILURE_POLICY") {
            Ok(value) => value.parse()?,
            Err(_) => FailurePolicy::default(),
        };
        Ok(Self { failure_policy })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_policy_from_str() {
        assert_eq!("abort".parse::<FailurePolicy>(), Ok(FailurePolicy::Abort));
        assert_eq!(" Skip ".parse::<FailurePolicy>(), Ok(FailurePolicy::SkipDocument));
        assert_eq!(
            "skip-document".parse::<FailurePolicy>(),
            Ok(FailurePolicy::SkipDocument)
        );
        assert!("retry".parse::<FailurePolicy>().is_err());
    }

    #[test]
    fn test_failure_policy_display_round_trip() {
        for policy in [FailurePolicy::Abort, FailurePolicy::SkipDocument] {
            assert_eq!(policy.to_string().parse::<FailurePolicy>(), Ok(policy));
        }
    }

    #[test]
    fn test_default_config() {
        let config = MergeConfig::default();
        assert_eq!(config.failure_policy, FailurePolicy::Abort);
    }
}
