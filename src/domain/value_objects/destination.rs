//! Destination path value object
//!
//! `<volume_root>/<PROJECT>/<YEAR>/<YYYY-MM-DD>--<version>`

use std::path::{Path, PathBuf};

use crate::config::StagingConfig;

use super::{ProjectName, ReleaseVersion};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationPath {
    volume_root: PathBuf,
    project: String,
    year: String,
    date_version: String,
}

impl DestinationPath {
    pub fn new(config: &StagingConfig, project: &ProjectName, version: &ReleaseVersion) -> Self {
        Self {
            volume_root: config.mount_point(),
            project: project.upper(),
            year: config.year(),
            date_version: format!("{}--{}", config.date_stamp(), version),
        }
    }

    pub fn volume_root(&self) -> &Path {
        &self.volume_root
    }

    /// `<volume_root>/<PROJECT>` - the only level created after confirmation
    pub fn project_dir(&self) -> PathBuf {
        self.volume_root.join(&self.project)
    }

    /// `<volume_root>/<PROJECT>/<YEAR>`
    pub fn year_dir(&self) -> PathBuf {
        self.project_dir().join(&self.year)
    }

    /// Full destination directory
    pub fn release_dir(&self) -> PathBuf {
        self.year_dir().join(&self.date_version)
    }

    /// The three levels, outermost first
    pub fn levels(&self) -> [PathBuf; 3] {
        [self.project_dir(), self.year_dir(), self.release_dir()]
    }

    /// Where a source file lands: `<release_dir>/<basename>`
    pub fn target_for(&self, source: &Path) -> PathBuf {
        match source.file_name() {
            Some(name) => self.release_dir().join(name),
            None => self.release_dir(),
        }
    }
}

impl std::fmt::Display for DestinationPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.release_dir().display())
    }
}
