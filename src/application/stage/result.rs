//! Stage Result
//!
//! Result types for staging runs.

use std::path::PathBuf;

use crate::domain::value_objects::{DestinationPath, ReleaseVersion};

/// Result of a successful staging run
#[derive(Debug, Clone)]
pub struct StageReport {
    /// Where files were staged
    pub destination: DestinationPath,
    /// Version used for the folder and artifact names
    pub version: ReleaseVersion,
    /// Directories that did not exist before the run
    pub created_dirs: Vec<PathBuf>,
    /// Target paths written
    pub copied: Vec<PathBuf>,
    /// Target paths left untouched after a declined overwrite
    pub skipped: Vec<PathBuf>,
    /// Batch mode found no artifact list for the project
    pub unsupported_project: bool,
}

impl StageReport {
    pub fn new(destination: DestinationPath, version: ReleaseVersion) -> Self {
        Self {
            destination,
            version,
            created_dirs: Vec::new(),
            copied: Vec::new(),
            skipped: Vec::new(),
            unsupported_project: false,
        }
    }

    pub fn has_changes(&self) -> bool {
        !self.created_dirs.is_empty() || !self.copied.is_empty()
    }
}
