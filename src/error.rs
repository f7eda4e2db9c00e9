//! Error types for siocopy
//!
//! Every variant is fatal for the run. Conditions that only skip work
//! (declined overwrite under `DeclinePolicy::Skip`, unknown project under
//! `UnknownProjectPolicy::Warn`) are recorded in the `StageReport` instead.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;
use crate::domain::value_objects::ArgumentMode;

/// Result type alias for staging operations
pub type StageResult<T> = Result<T, StageError>;

/// Main error type for staging operations
#[derive(Error, Debug)]
pub enum StageError {
    /// Wrong number of positional arguments
    #[error("please provide {mode} parameters, received {received} parameter(s)")]
    Usage { received: usize, mode: ArgumentMode },

    /// The deployment volume is not mounted
    #[error("volume '{volume}' was not found at {mount_point}")]
    VolumeNotMounted { volume: String, mount_point: PathBuf },

    /// No descriptor file to read the version from
    #[error("version descriptor does not exist: {path}")]
    VersionDescriptorMissing { path: PathBuf },

    /// Descriptor file has no `<version>` tag
    #[error("could not find [version] in {path}")]
    VersionNotFound { path: PathBuf },

    /// Descriptor file exists but could not be read
    #[error("failed to read {path}: {source}")]
    DescriptorUnreadable {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Operator declined to create the project directory
    #[error("creation of directory {path} was declined")]
    DirectoryCreationDeclined { path: PathBuf },

    /// A destination directory could not be created
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Artifact to copy does not exist
    #[error("file does not exist: {path}")]
    SourceFileNotFound { path: PathBuf },

    /// Operator declined to replace an existing file (abort policy)
    #[error("replacing {path} was declined")]
    OverwriteDeclined { path: PathBuf },

    /// Batch mode has no artifact list for the project (strict policy)
    #[error("batch mode does not support project '{project}'")]
    UnsupportedProject { project: String },

    /// Copy itself failed
    #[error("failed to copy {from} to {to}: {source}")]
    CopyFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: FsError,
    },
}

impl StageError {
    /// Process exit code for this error.
    ///
    /// Usage errors follow the clap convention (2); everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            StageError::Usage { .. } => 2,
            _ => 1,
        }
    }
}
