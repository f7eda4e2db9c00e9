use std::path::Path;

use siocopy::StageError;

use crate::ui::context::UiContext;
use crate::ui::primitives::text::Tone;
use crate::ui::views::stage::{error_line, note_line, render_done};

fn path(p: &Path) -> String {
    p.display().to_string()
}

pub fn format_stage_error(err: &StageError, color: bool) -> String {
    match err {
        // The command layer prints the usage screen itself.
        StageError::Usage { .. } => String::new(),
        StageError::VolumeNotMounted { volume, .. } => [
            note_line(&format!("{} was not found", volume), Tone::Error, color),
            format!(
                "    > make sure that {} is mounted before running this script.",
                volume
            ),
        ]
        .join("\n"),
        StageError::VersionDescriptorMissing { path: p }
        | StageError::SourceFileNotFound { path: p } => {
            error_line("File does not exist", &path(p), color)
        }
        StageError::VersionNotFound { path: p } => {
            error_line("Could not find [version] from", &path(p), color)
        }
        StageError::DescriptorUnreadable { path: p, source } => [
            error_line("Could not read", &path(p), color),
            note_line(&source.to_string(), Tone::Dim, color),
        ]
        .join("\n"),
        StageError::DirectoryCreationDeclined { path: p } => {
            error_line("Directory was not created", &path(p), color)
        }
        StageError::DirectoryCreationFailed { path: p, source } => [
            error_line("Could not create directory", &path(p), color),
            note_line(&source.to_string(), Tone::Dim, color),
        ]
        .join("\n"),
        StageError::OverwriteDeclined { path: p } => {
            error_line("File was not replaced", &path(p), color)
        }
        StageError::UnsupportedProject { project } => {
            error_line("No artifact list for project", project, color)
        }
        StageError::CopyFailed { from, to, source } => [
            error_line("Could not copy file", &path(from), color),
            note_line(&format!("to {}", to.display()), Tone::Dim, color),
            note_line(&source.to_string(), Tone::Dim, color),
        ]
        .join("\n"),
    }
}

pub fn format_error(err: &anyhow::Error, ui: &UiContext) -> String {
    if let Some(stage) = err.downcast_ref::<StageError>() {
        return format_stage_error(stage, ui.color);
    }

    let mut out = error_line("Error", &err.to_string(), ui.color);
    for cause in err.chain().skip(1) {
        out.push('\n');
        out.push_str(&note_line(&cause.to_string(), Tone::Dim, ui.color));
    }
    out
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if matches!(
        err.downcast_ref::<StageError>(),
        Some(StageError::Usage { .. })
    ) {
        return;
    }

    eprintln!("{}", format_error(err, ui));
    println!("{}", render_done(false, ui));
}

pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<StageError>()
        .map(StageError::exit_code)
        .unwrap_or(1)
}
