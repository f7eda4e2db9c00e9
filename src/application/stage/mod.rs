//! Stage Module
//!
//! Orchestrates one staging run.
//!
//! ## Structure
//!
//! - `options` - Policies for the run (`StageOptions`)
//! - `result` - Result types (`StageReport`)
//! - `use_case` - Core use case logic (`StageUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use siocopy::application::stage::{StageOptions, StageUseCase};
//!
//! let use_case = StageUseCase::new(LocalFs::new(), config, ArtifactTable::builtin());
//! let report = use_case.execute(&invocation, &StageOptions::for_invocation(&invocation))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::StageOptions;
pub use result::StageReport;
pub use use_case::StageUseCase;
