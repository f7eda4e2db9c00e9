//! Terminal Confirmer
//!
//! Prompts through dialoguer when stdin is a TTY. The answer is still parsed
//! by `Confirmation::parse`, so only `y`/`yes` accept.

use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::Input;

use crate::domain::ports::{ConfirmPrompt, Confirmation, Confirmer};

use super::{prompt_text, PROMPT_PREFIX};

pub struct TerminalConfirmer {
    color: bool,
}

impl TerminalConfirmer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn ask(&self, theme: &dyn Theme, prompt: &ConfirmPrompt) -> Confirmation {
        let question = format!("{}{}", PROMPT_PREFIX, prompt_text(prompt));
        let answer = Input::<String>::with_theme(theme)
            .with_prompt(question.trim_end())
            .allow_empty(true)
            .report(false)
            .interact_text();

        match answer {
            Ok(line) => Confirmation::parse(Some(&line)),
            Err(_) => Confirmation::parse(None),
        }
    }
}

impl Default for TerminalConfirmer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, prompt: &ConfirmPrompt) -> Confirmation {
        if self.color {
            self.ask(&ColorfulTheme::default(), prompt)
        } else {
            self.ask(&SimpleTheme, prompt)
        }
    }
}
