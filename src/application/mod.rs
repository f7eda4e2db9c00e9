//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `StageUseCase` - mount check, version, directories, copies

pub mod stage;

pub use stage::{StageOptions, StageReport, StageUseCase};
