//! Common test utilities for siocopy CLI tests.
//!
//! This module provides:
//! - `TestEnv`: a temp checkout plus a temp volumes root with `sioapps` mounted
//! - Fixtures: artifact names and descriptor content

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
