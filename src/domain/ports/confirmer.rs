//! Confirmer Port
//!
//! Yes/no questions asked before a destructive or structural step.
//! Implementations can be interactive (prompting the operator) or automatic.

use std::path::Path;

/// What the operator is being asked to confirm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmPrompt<'a> {
    /// Create the missing top-level project directory
    CreateDirectory { path: &'a Path },
    /// Replace a file that already exists at the destination
    ReplaceFile { path: &'a Path },
}

impl ConfirmPrompt<'_> {
    pub fn question(&self) -> &'static str {
        match self {
            ConfirmPrompt::CreateDirectory { .. } => "Create this directory?",
            ConfirmPrompt::ReplaceFile { .. } => "Replace this file?",
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ConfirmPrompt::CreateDirectory { path } | ConfirmPrompt::ReplaceFile { path } => path,
        }
    }
}

/// Parsed answer to a confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Accepted,
    Declined,
}

impl Confirmation {
    /// Parse one line of operator input.
    ///
    /// Only `y` and `yes` (any case) accept. `None` is end of input.
    pub fn parse(answer: Option<&str>) -> Self {
        let Some(answer) = answer else {
            return Confirmation::Declined;
        };
        let answer = answer.trim_end_matches(['\r', '\n']);
        if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
            Confirmation::Accepted
        } else {
            Confirmation::Declined
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Confirmation::Accepted)
    }
}

/// Trait for answering confirmation prompts.
///
/// Implementations:
/// - `TerminalConfirmer`: dialoguer prompt on a TTY
/// - `LineConfirmer`: reads lines from any `BufRead` (piped stdin)
/// - `AutoConfirmer`: always accepts (`--yes`)
pub trait Confirmer: Send + Sync {
    fn confirm(&self, prompt: &ConfirmPrompt) -> Confirmation;
}

/// Confirmer that accepts every prompt.
pub struct AutoConfirmer;

impl Confirmer for AutoConfirmer {
    fn confirm(&self, _prompt: &ConfirmPrompt) -> Confirmation {
        Confirmation::Accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parse_accepts_y_and_yes_in_any_case() {
        for answer in ["y", "Y", "yes", "Yes", "YES", "yEs", "y\n", "yes\r\n"] {
            assert_eq!(
                Confirmation::parse(Some(answer)),
                Confirmation::Accepted,
                "{answer:?}"
            );
        }
    }

    #[test]
    fn parse_rejects_everything_else() {
        for answer in ["", "n", "no", "yep", "yess", " y", "y ", "ok", "1"] {
            assert_eq!(
                Confirmation::parse(Some(answer)),
                Confirmation::Declined,
                "{answer:?}"
            );
        }
    }

    #[test]
    fn end_of_input_declines() {
        assert_eq!(Confirmation::parse(None), Confirmation::Declined);
    }

    #[test]
    fn auto_confirmer_always_accepts() {
        let path = PathBuf::from("/Volumes/sioapps/SAMBA");
        let prompt = ConfirmPrompt::CreateDirectory { path: &path };
        assert!(AutoConfirmer.confirm(&prompt).is_accepted());
    }

    #[test]
    fn prompt_questions() {
        let path = PathBuf::from("a.war");
        assert_eq!(
            ConfirmPrompt::ReplaceFile { path: &path }.question(),
            "Replace this file?"
        );
        assert_eq!(
            ConfirmPrompt::CreateDirectory { path: &path }.path(),
            path.as_path()
        );
    }
}
