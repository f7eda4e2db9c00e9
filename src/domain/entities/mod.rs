//! Domain Entities

mod artifact_table;

pub use artifact_table::{ArtifactSpec, ArtifactTable, VERSION_PLACEHOLDER};
