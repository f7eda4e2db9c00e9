//! Infrastructure implementations for Confirmer
//!
//! This module provides concrete implementations of the `Confirmer` trait.

mod line;
mod terminal;

pub use line::LineConfirmer;
pub use terminal::TerminalConfirmer;

use crate::domain::ports::ConfirmPrompt;

/// Prefix in front of every question, lined up with the console report.
pub const PROMPT_PREFIX: &str = "   ?> ";

/// `Create this directory? [y/n] `
pub fn prompt_text(prompt: &ConfirmPrompt) -> String {
    format!("{} [y/n] ", prompt.question())
}
