use std::path::Path;

use siocopy::{StageEvent, StageReport, StagingConfig};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{styled, Tone};
use crate::ui::theme::markers;

/// `\n >> Title: subject` - starts a step of the run
pub fn section(title: &str, subject: &str, color: bool) -> String {
    format!(
        "\n{}{}: {}",
        markers::SECTION,
        title,
        styled(Tone::Highlight, subject, color)
    )
}

/// `     > Text: [ reason ]`
pub fn info_line(text: &str, reason: &str, color: bool) -> String {
    format!(
        "{}{}{}",
        styled(Tone::Info, &format!("{}{}: [ ", markers::INFO, text), color),
        styled(Tone::Success, reason, color),
        styled(Tone::Info, " ]", color)
    )
}

/// `   !> Text: [ reason ]`
pub fn error_line(text: &str, reason: &str, color: bool) -> String {
    format!(
        "{}{}{}",
        styled(Tone::Error, &format!("{}{}: [ ", markers::ERROR, text), color),
        reason,
        styled(Tone::Error, " ]", color)
    )
}

/// `    > text` - free-form follow-up under an error
pub fn note_line(text: &str, tone: Tone, color: bool) -> String {
    styled(tone, &format!("{}{}", markers::NOTE, text), color)
}

fn path_str(path: &Path) -> String {
    path.display().to_string()
}

pub fn render_event(event: &StageEvent, ui: &UiContext) -> Option<String> {
    let c = ui.color;
    let rendered = match event {
        StageEvent::CheckingVolume {
            volume,
            mount_point,
        } => {
            let mut out = section("Checking for Volume", volume, c);
            if ui.verbose > 0 {
                out.push('\n');
                out.push_str(&info_line("Mount point", &path_str(mount_point), c));
            }
            out
        }
        StageEvent::ReadingVersion { descriptor } => {
            section("Getting [version] from", &path_str(descriptor), c)
        }
        StageEvent::VersionResolved {
            version,
            from_descriptor,
        } => {
            if *from_descriptor {
                info_line("Found version", version, c)
            } else if ui.verbose > 0 {
                info_line("Using version", version, c)
            } else {
                return None;
            }
        }
        StageEvent::Navigating { destination } => {
            section("Navigating to", &path_str(destination), c)
        }
        StageEvent::DirectoryMissing { path } => {
            error_line("Directory does not exist", &path_str(path), c)
        }
        StageEvent::DirectoryCreated { path } => info_line("Created directory", &path_str(path), c),
        StageEvent::UnsupportedProject { project } => format!(
            "{}\n{}",
            error_line(
                "This mode does not have support for the following project",
                project,
                c
            ),
            info_line(
                "Try copying one file at a time using",
                "siocopy [project] [file]",
                c
            )
        ),
        StageEvent::CopyStarted { source } => section("Copying file", &path_str(source), c),
        StageEvent::FileExists { target } => {
            error_line("File already exists", &path_str(target), c)
        }
        StageEvent::FileCopied { target, .. } => info_line("Copied file to", &path_str(target), c),
        StageEvent::FileSkipped { target } => {
            info_line("Kept existing file", &path_str(target), c)
        }
    };
    Some(rendered)
}

/// Resolved configuration, shown with `-v`
pub fn render_config(config: &StagingConfig, ui: &UiContext) -> String {
    let c = ui.color;
    [
        info_line("Volume", &path_str(&config.mount_point()), c),
        info_line("Date", &config.date_stamp(), c),
        info_line("Working directory", &path_str(&config.working_dir), c),
    ]
    .join("\n")
}

/// Counts at the end of a run, shown with `-v`
pub fn render_summary(report: &StageReport, ui: &UiContext) -> String {
    let c = ui.color;
    let mut lines = vec![
        section("Staged in", &report.destination.to_string(), c),
        info_line("Copied", &format!("{} file(s)", report.copied.len()), c),
    ];
    if !report.skipped.is_empty() {
        lines.push(info_line(
            "Skipped",
            &format!("{} file(s)", report.skipped.len()),
            c,
        ));
    }
    if !report.created_dirs.is_empty() {
        lines.push(info_line(
            "Created",
            &format!("{} directories", report.created_dirs.len()),
            c,
        ));
    }
    lines.join("\n")
}

/// `\n >> Done <icon>`
pub fn render_done(success: bool, ui: &UiContext) -> String {
    let icon = if success { Icon::Done } else { Icon::Failed };
    format!("\n{}Done {}", markers::SECTION, icon.render(ui.unicode))
}
