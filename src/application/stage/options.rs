//! Stage Options
//!
//! Policies that decide what the non-fatal conditions do.

use crate::domain::value_objects::{DeclinePolicy, Invocation, UnknownProjectPolicy};

/// Options for the stage use case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageOptions {
    /// What a declined overwrite does
    pub on_decline: DeclinePolicy,
    /// What batch mode does for a project without artifacts
    pub unknown_project: UnknownProjectPolicy,
}

impl StageOptions {
    /// Defaults matching the invocation: batch runs skip declined files,
    /// single-file runs abort.
    pub fn for_invocation(invocation: &Invocation) -> Self {
        Self {
            on_decline: DeclinePolicy::default_for(invocation.is_batch()),
            unknown_project: UnknownProjectPolicy::default(),
        }
    }

    pub fn with_decline_policy(mut self, policy: DeclinePolicy) -> Self {
        self.on_decline = policy;
        self
    }

    pub fn with_unknown_project_policy(mut self, policy: UnknownProjectPolicy) -> Self {
        self.unknown_project = policy;
        self
    }
}
