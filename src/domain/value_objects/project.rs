//! Project name value object
//!
//! Paths and messages use the uppercase form (`SAMBA`); artifact lookups use
//! the lowercase form (`samba`). The operator's spelling is kept as given.

/// Project name as typed on the command line
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Returns `None` for an empty name. Anything else is kept verbatim.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            return None;
        }
        Some(Self(name))
    }

    /// Name as given by the operator
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Uppercase form used for the destination directory
    pub fn upper(&self) -> String {
        self.0.to_uppercase()
    }

    /// Lowercase form used for artifact table lookups
    pub fn lower(&self) -> String {
        self.0.to_lowercase()
    }
}

impl std::fmt::Display for ProjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.upper())
    }
}
