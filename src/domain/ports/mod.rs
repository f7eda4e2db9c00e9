//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod confirmer;
pub mod file_system;
pub mod stage_events;

pub use confirmer::{AutoConfirmer, ConfirmPrompt, Confirmation, Confirmer};
pub use file_system::{FileSystem, FsError, FsResult};
pub use stage_events::{NoopEventSink, StageEvent, StageEventSink};
