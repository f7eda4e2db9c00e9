//! Domain Services
//!
//! Stateless logic that reads through ports but owns no I/O itself.

pub mod version_resolver;

pub use version_resolver::{extract_version, resolve_version};
