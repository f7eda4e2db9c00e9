//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, in-memory for tests)
//! - `prompt/` - Confirmer implementations (terminal, line based)

pub mod fs;
pub mod prompt;

// Re-export for convenience
pub use fs::LocalFs;
pub use prompt::{LineConfirmer, TerminalConfirmer};
