//! Console reporter
//!
//! Everything the operator sees goes through here: stage events, errors,
//! the usage screen and the closing banner.

pub mod context;
pub mod error;
pub mod events;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
