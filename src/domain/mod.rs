//! Domain Layer
//!
//! Pure staging rules without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - The artifact table for batch mode
//! - `value_objects/` - Immutable value types (ProjectName, ReleaseVersion, DestinationPath)
//! - `services/` - Stateless domain services (version resolution)
//! - `ports/` - Interface definitions for infrastructure (file system, prompts, events)

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
