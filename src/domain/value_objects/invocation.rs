//! Invocation value object - the validated positional arguments
//!
//! `siocopy <project> [file] [version]` (optional file) or
//! `siocopy <project> <file> [version]` (required file).

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use crate::error::{StageError, StageResult};

use super::{ProjectName, ReleaseVersion};

/// How many positional arguments are accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArgumentMode {
    /// 1-3 arguments; without a file the project's known artifacts are copied
    #[default]
    OptionalFile,
    /// 2-3 arguments; a file is always given
    RequiredFile,
}

impl ArgumentMode {
    pub fn accepted(&self) -> RangeInclusive<usize> {
        match self {
            ArgumentMode::OptionalFile => 1..=3,
            ArgumentMode::RequiredFile => 2..=3,
        }
    }

    pub fn accepts(&self, count: usize) -> bool {
        self.accepted().contains(&count)
    }
}

impl std::fmt::Display for ArgumentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let range = self.accepted();
        write!(f, "{}-{}", range.start(), range.end())
    }
}

/// One staging request. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub project: ProjectName,
    /// Absolute path of the single file to copy; `None` means batch mode
    pub file: Option<PathBuf>,
    /// Explicit version; `None` means read it from the descriptor
    pub version: Option<ReleaseVersion>,
}

impl Invocation {
    /// Validate raw positional arguments.
    ///
    /// The file argument is resolved against `working_dir`.
    pub fn parse<S: AsRef<str>>(
        args: &[S],
        mode: ArgumentMode,
        working_dir: &Path,
    ) -> StageResult<Self> {
        let usage = || StageError::Usage {
            received: args.len(),
            mode,
        };

        if !mode.accepts(args.len()) {
            return Err(usage());
        }

        let project = ProjectName::new(args[0].as_ref()).ok_or_else(usage)?;
        let file = args.get(1).map(|f| working_dir.join(f.as_ref()));
        let version = args.get(2).map(|v| ReleaseVersion::new(v.as_ref()));

        Ok(Self {
            project,
            file,
            version,
        })
    }

    /// True when no file was given and the artifact table drives the copy
    pub fn is_batch(&self) -> bool {
        self.file.is_none()
    }
}
