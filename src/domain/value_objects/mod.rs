//! Domain Value Objects
//!
//! Immutable value types built once per invocation.

mod destination;
mod invocation;
mod policy;
mod project;
mod version;

pub use destination::DestinationPath;
pub use invocation::{ArgumentMode, Invocation};
pub use policy::{DeclinePolicy, UnknownProjectPolicy};
pub use project::ProjectName;
pub use version::ReleaseVersion;
