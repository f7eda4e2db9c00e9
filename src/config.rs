//! Staging configuration
//!
//! Everything that used to be a process-wide constant (volume name, mount
//! root, today's date) lives here. The binary builds one `StagingConfig`
//! at startup and hands it to the use case.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

/// Volume that release folders are staged on.
pub const DEFAULT_VOLUME: &str = "sioapps";

/// Directory under which removable and network volumes are mounted.
pub const DEFAULT_VOLUMES_ROOT: &str = "/Volumes";

/// Build descriptor the version is read from.
pub const DEFAULT_DESCRIPTOR: &str = "pom.xml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagingConfig {
    /// Name of the mounted volume (e.g. `sioapps`)
    pub volume_name: String,
    /// Directory containing mount points (e.g. `/Volumes`)
    pub volumes_root: PathBuf,
    /// Descriptor file name, resolved against `working_dir`
    pub descriptor_name: String,
    /// Date used for the `<YEAR>` and `<YYYY-MM-DD>` path segments
    pub today: NaiveDate,
    /// Directory relative file arguments and artifact templates resolve against
    pub working_dir: PathBuf,
}

impl StagingConfig {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            volume_name: DEFAULT_VOLUME.to_string(),
            volumes_root: PathBuf::from(DEFAULT_VOLUMES_ROOT),
            descriptor_name: DEFAULT_DESCRIPTOR.to_string(),
            today: Local::now().date_naive(),
            working_dir: working_dir.into(),
        }
    }

    pub fn with_volume_name(mut self, name: impl Into<String>) -> Self {
        self.volume_name = name.into();
        self
    }

    pub fn with_volumes_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.volumes_root = root.into();
        self
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// `<volumes_root>/<volume_name>`
    pub fn mount_point(&self) -> PathBuf {
        self.volumes_root.join(&self.volume_name)
    }

    /// `./pom.xml` in the working directory
    pub fn descriptor_path(&self) -> PathBuf {
        self.working_dir.join(&self.descriptor_name)
    }

    /// Four digit year segment
    pub fn year(&self) -> String {
        self.today.format("%Y").to_string()
    }

    /// `YYYY-MM-DD` date stamp
    pub fn date_stamp(&self) -> String {
        self.today.format("%Y-%m-%d").to_string()
    }

    /// Resolve a path given on the command line against the working directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.working_dir.join(path)
    }
}
