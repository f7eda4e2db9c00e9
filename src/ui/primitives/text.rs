use std::fmt;

use crossterm::style::Stylize;

use crate::ui::theme;

/// Semantic tag for a piece of console text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Framing of informational lines
    Info,
    /// Failures and warnings that need attention
    Error,
    /// The part of an informational line that succeeded
    Success,
    /// Headings of the usage screen
    Usage,
    /// Paths and names
    Highlight,
    Dim,
}

/// Style `text` for `tone`; plain text when color is off.
pub fn styled(tone: Tone, text: &str, supports_color: bool) -> String {
    ColoredText::new(tone, text).render(supports_color)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    tone: Tone,
    bold: bool,
}

impl ColoredText {
    pub fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone,
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }

        let color = match self.tone {
            Tone::Info | Tone::Usage => theme::colors::WARNING,
            Tone::Error => theme::colors::ERROR,
            Tone::Success => theme::colors::SUCCESS,
            Tone::Highlight => theme::colors::HIGHLIGHT,
            Tone::Dim => theme::colors::DIM,
        };

        let mut styled = self.text.as_str().with(color);
        if self.bold {
            styled = styled.bold();
        }

        format!("{}", styled)
    }
}

impl fmt::Display for ColoredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
