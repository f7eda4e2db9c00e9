use crossterm::style::Color;

/// Design tokens for the siocopy console report.
///
/// Design constraints:
/// - Only the semantic colors below (`colors::*`)
/// - All icons and line markers must be sourced from this module
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    /// Paths and names the operator should look at
    pub const HIGHLIGHT: Color = Color::Magenta;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const DONE: &str = "👍";
    pub const FAILED: &str = "👎";
}

pub mod icons_ascii {
    pub const DONE: &str = ":)";
    pub const FAILED: &str = ":(";
}

/// Line prefixes, indented so nested messages line up under a section.
pub mod markers {
    pub const SECTION: &str = " >> ";
    pub const INFO: &str = "     > ";
    pub const ERROR: &str = "   !> ";
    pub const NOTE: &str = "    > ";
}
