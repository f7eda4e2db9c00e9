use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use siocopy::DeclinePolicy;

/// siocopy - stage release artifacts into dated deployment folders
#[derive(Parser, Debug)]
#[command(name = "siocopy")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Without [file], every known .war/.zip artifact of the project is copied."
)]
pub struct Cli {
    /// Project name (e.g. samba, bris)
    pub project: Option<String>,

    /// Artifact to copy, relative to the current directory
    pub file: Option<String>,

    /// Release version (read from ./pom.xml when omitted)
    #[arg(id = "release", value_name = "VERSION")]
    pub version: Option<String>,

    /// Surplus arguments, reported as a usage error
    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// Require the file argument (2-3 parameters)
    #[arg(long)]
    pub require_file: bool,

    /// What declining an overwrite does: skip (batch default) or abort (single-file default)
    #[arg(long, value_name = "POLICY")]
    pub on_decline: Option<DeclinePolicy>,

    /// Fail when batch mode does not know the project
    #[arg(long)]
    pub strict_projects: bool,

    /// Answer yes to every confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Color output (auto, always, never)
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Directory containing volume mount points
    #[arg(long, hide = true, value_name = "DIR")]
    pub volumes_root: Option<PathBuf>,

    /// Volume to stage on
    #[arg(long, hide = true, value_name = "NAME")]
    pub volume: Option<String>,

    /// Staging date used for the folder names
    #[arg(long, hide = true, value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,
}

impl Cli {
    /// Positional arguments in order, surplus included
    pub fn positionals(&self) -> Vec<String> {
        [&self.project, &self.file, &self.version]
            .into_iter()
            .flatten()
            .cloned()
            .chain(self.extra.iter().cloned())
            .collect()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}
