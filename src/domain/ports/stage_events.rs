//! Stage Event Port
//!
//! Progress of a staging run, in the order it happens. The console sink
//! renders these; tests record them.

use std::path::PathBuf;

/// Event emitted during a staging run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageEvent {
    /// Mount check started
    CheckingVolume { volume: String, mount_point: PathBuf },

    /// Version is being read from the descriptor
    ReadingVersion { descriptor: PathBuf },

    /// Version known (explicit or read)
    VersionResolved { version: String, from_descriptor: bool },

    /// Destination provisioning started
    Navigating { destination: PathBuf },

    /// Top-level directory is missing and needs confirmation
    DirectoryMissing { path: PathBuf },

    /// Directory created
    DirectoryCreated { path: PathBuf },

    /// Batch mode has no artifact list for this project
    UnsupportedProject { project: String },

    /// Copy of one file started
    CopyStarted { source: PathBuf },

    /// Target file already exists
    FileExists { target: PathBuf },

    /// File copied
    FileCopied { source: PathBuf, target: PathBuf },

    /// Replacement declined; file left untouched
    FileSkipped { target: PathBuf },
}

/// Trait for receiving stage events
pub trait StageEventSink: Send + Sync {
    fn on_event(&self, event: StageEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl StageEventSink for NoopEventSink {
    fn on_event(&self, _event: StageEvent) {}
}
