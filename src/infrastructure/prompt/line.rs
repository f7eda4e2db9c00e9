//! Line-based Confirmer
//!
//! Writes the question and reads one line of input. Used when stdin is not a
//! terminal (piped answers, scripts, tests).

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::sync::Mutex;

use is_terminal::IsTerminal;

use crate::domain::ports::{ConfirmPrompt, Confirmation, Confirmer};

use super::{prompt_text, PROMPT_PREFIX};

/// Confirmer reading answers from any `BufRead`.
///
/// End of input and read errors are treated as a decline.
pub struct LineConfirmer<R, W> {
    io: Mutex<(R, W)>,
    echo: bool,
}

impl<R, W> LineConfirmer<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    pub fn new(input: R, output: W) -> Self {
        Self {
            io: Mutex::new((input, output)),
            echo: false,
        }
    }

    /// Repeat each answer after the question (input that is not a terminal).
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Give back the reader and writer (tests inspect the written prompts).
    pub fn into_inner(self) -> (R, W) {
        match self.io.into_inner() {
            Ok(io) => io,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl LineConfirmer<BufReader<Stdin>, Stdout> {
    /// Prompts on stdout, answers from stdin.
    pub fn stdio() -> Self {
        let echo = !io::stdin().is_terminal();
        Self::new(BufReader::new(io::stdin()), io::stdout()).with_echo(echo)
    }
}

impl<R, W> Confirmer for LineConfirmer<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn confirm(&self, prompt: &ConfirmPrompt) -> Confirmation {
        let mut guard = match self.io.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let (input, output) = &mut *guard;

        let _ = write!(output, "{}{}", PROMPT_PREFIX, prompt_text(prompt));
        let _ = output.flush();

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => {
                let _ = writeln!(output);
                Confirmation::parse(None)
            }
            Ok(_) => {
                if self.echo {
                    let _ = writeln!(output, "{}", line.trim_end_matches(['\r', '\n']));
                }
                Confirmation::parse(Some(&line))
            }
        }
    }
}
