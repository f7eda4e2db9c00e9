//! Policies for the two non-fatal batch conditions
//!
//! - `DeclinePolicy`: what a declined overwrite prompt does
//! - `UnknownProjectPolicy`: what batch mode does for a project with no artifact list

use std::str::FromStr;

/// What happens when the operator declines to replace an existing file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclinePolicy {
    /// Leave the existing file alone and continue with the next one
    Skip,
    /// Stop the whole run
    Abort,
}

impl DeclinePolicy {
    /// Default for a run: batch mode skips, single-file mode aborts.
    pub fn default_for(batch: bool) -> Self {
        if batch {
            DeclinePolicy::Skip
        } else {
            DeclinePolicy::Abort
        }
    }
}

impl std::fmt::Display for DeclinePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeclinePolicy::Skip => write!(f, "skip"),
            DeclinePolicy::Abort => write!(f, "abort"),
        }
    }
}

impl FromStr for DeclinePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "skip" => Ok(DeclinePolicy::Skip),
            "abort" => Ok(DeclinePolicy::Abort),
            other => Err(format!(
                "invalid decline policy '{}' (expected 'skip' or 'abort')",
                other
            )),
        }
    }
}

/// What batch mode does for a project missing from the artifact table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnknownProjectPolicy {
    /// Report it, copy nothing, finish successfully
    #[default]
    Warn,
    /// Fail the run
    Fail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_mode_defaults_to_skip() {
        assert_eq!(DeclinePolicy::default_for(true), DeclinePolicy::Skip);
    }

    #[test]
    fn single_file_mode_defaults_to_abort() {
        assert_eq!(DeclinePolicy::default_for(false), DeclinePolicy::Abort);
    }

    #[test]
    fn decline_policy_parses_case_insensitively() {
        assert_eq!("Skip".parse::<DeclinePolicy>(), Ok(DeclinePolicy::Skip));
        assert_eq!("ABORT".parse::<DeclinePolicy>(), Ok(DeclinePolicy::Abort));
        assert!("continue".parse::<DeclinePolicy>().is_err());
    }

    #[test]
    fn decline_policy_display_round_trips_through_parse() {
        for policy in [DeclinePolicy::Skip, DeclinePolicy::Abort] {
            assert_eq!(policy.to_string().parse::<DeclinePolicy>(), Ok(policy));
        }
    }

    #[test]
    fn unknown_project_policy_default_is_warn() {
        assert_eq!(UnknownProjectPolicy::default(), UnknownProjectPolicy::Warn);
    }
}
