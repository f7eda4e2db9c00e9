//! siocopy - release artifact staging tool
//!
//! Copies build artifacts into dated deployment folders on a mounted volume:
//! `<mount>/<PROJECT>/<YEAR>/<YYYY-MM-DD>--<version>/`.
//!
//! The library holds the staging workflow behind ports (file system,
//! confirmation prompts, progress events) so the binary only wires
//! terminal implementations to it.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::stage::{StageOptions, StageReport, StageUseCase};
pub use config::StagingConfig;
pub use domain::entities::ArtifactTable;
pub use domain::ports::{
    AutoConfirmer, ConfirmPrompt, Confirmation, Confirmer, FileSystem, NoopEventSink, StageEvent,
    StageEventSink,
};
pub use domain::value_objects::{
    ArgumentMode, DeclinePolicy, DestinationPath, Invocation, ProjectName, ReleaseVersion,
    UnknownProjectPolicy,
};
pub use error::{StageError, StageResult};
pub use infrastructure::{LineConfirmer, LocalFs, TerminalConfirmer};
