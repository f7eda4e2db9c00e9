//! `siocopy <project> [file] [version]`

use std::sync::Arc;

use anyhow::{Context, Result};
use siocopy::{
    ArgumentMode, ArtifactTable, AutoConfirmer, Confirmer, Invocation,
    LineConfirmer, LocalFs, StageError, StageOptions, StageUseCase, StagingConfig,
    TerminalConfirmer, UnknownProjectPolicy,
};

use crate::cli::Cli;
use crate::ui::context::UiContext;
use crate::ui::events::ConsoleEventSink;
use crate::ui::views::stage::{render_config, render_done, render_summary};
use crate::ui::views::usage::render_usage;

pub fn cmd_stage(cli: &Cli, ui: &UiContext) -> Result<()> {
    let working_dir = std::env::current_dir().context("Failed to read current directory")?;
    let config = build_config(cli, working_dir);
    let artifacts = ArtifactTable::builtin();

    let mode = if cli.require_file {
        ArgumentMode::RequiredFile
    } else {
        ArgumentMode::OptionalFile
    };

    let invocation = match Invocation::parse(&cli.positionals(), mode, &config.working_dir) {
        Ok(invocation) => invocation,
        Err(err @ StageError::Usage { received, mode }) => {
            print!("{}", render_usage(received, mode, &config, &artifacts, ui));
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };

    if ui.verbose > 0 {
        println!("{}", render_config(&config, ui));
    }

    let options = build_options(cli, &invocation);
    let confirmer = select_confirmer(cli, ui);
    let events = Arc::new(ConsoleEventSink::new(*ui));

    let use_case = StageUseCase::new(LocalFs::new(), config, artifacts);
    let report = use_case.execute_full(&invocation, &options, events, confirmer)?;

    if ui.verbose > 0 {
        println!("{}", render_summary(&report, ui));
    }
    println!("{}", render_done(true, ui));

    Ok(())
}

fn build_config(cli: &Cli, working_dir: std::path::PathBuf) -> StagingConfig {
    let mut config = StagingConfig::new(working_dir);
    if let Some(root) = &cli.volumes_root {
        config = config.with_volumes_root(root);
    }
    if let Some(volume) = &cli.volume {
        config = config.with_volume_name(volume);
    }
    if let Some(today) = cli.today {
        config = config.with_today(today);
    }
    config
}

fn build_options(cli: &Cli, invocation: &Invocation) -> StageOptions {
    let mut options = StageOptions::for_invocation(invocation);
    if let Some(policy) = cli.on_decline {
        options = options.with_decline_policy(policy);
    }
    if cli.strict_projects {
        options = options.with_unknown_project_policy(UnknownProjectPolicy::Fail);
    }
    options
}

/// How confirmation prompts are answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptMode {
    /// `--yes`
    Auto,
    /// dialoguer; stdin and stderr are terminals
    Terminal,
    /// Plain line reads from stdin
    Line,
}

fn prompt_mode(cli: &Cli, ui: &UiContext) -> PromptMode {
    if cli.yes {
        PromptMode::Auto
    } else if ui.interactive() {
        PromptMode::Terminal
    } else {
        PromptMode::Line
    }
}

fn select_confirmer(cli: &Cli, ui: &UiContext) -> Arc<dyn Confirmer> {
    match prompt_mode(cli, ui) {
        PromptMode::Auto => Arc::new(AutoConfirmer),
        PromptMode::Terminal => Arc::new(TerminalConfirmer::new(ui.color)),
        PromptMode::Line => Arc::new(LineConfirmer::stdio()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use crate::ui::terminal::TerminalCapabilities;
    use siocopy::DeclinePolicy;
    use std::path::PathBuf;

    fn ui(stdin_is_tty: bool, stderr_is_tty: bool) -> UiContext {
        UiContext::from_caps(
            0,
            None,
            TerminalCapabilities {
                is_tty: true,
                stdin_is_tty,
                stderr_is_tty,
                supports_color: false,
                supports_unicode: true,
                is_ci: false,
            },
        )
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("siocopy").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn hidden_flags_override_config() {
        let cli = cli(&[
            "--volumes-root",
            "/mnt",
            "--volume",
            "staging",
            "--today",
            "2016-11-02",
            "samba",
        ]);
        let config = build_config(&cli, PathBuf::from("/work"));
        assert_eq!(config.mount_point(), PathBuf::from("/mnt/staging"));
        assert_eq!(config.date_stamp(), "2016-11-02");
    }

    #[test]
    fn decline_policy_defaults_by_mode_unless_given() {
        let batch = cli(&["samba"]);
        let inv = Invocation::parse(&batch.positionals(), ArgumentMode::OptionalFile, "/w".as_ref())
            .unwrap();
        assert_eq!(build_options(&batch, &inv).on_decline, DeclinePolicy::Skip);

        let forced = cli(&["--on-decline", "abort", "samba"]);
        assert_eq!(build_options(&forced, &inv).on_decline, DeclinePolicy::Abort);
    }

    #[test]
    fn strict_projects_fails_unknown_projects() {
        let cli = cli(&["--strict-projects", "helse"]);
        let inv = Invocation::parse(&cli.positionals(), ArgumentMode::OptionalFile, "/w".as_ref())
            .unwrap();
        assert_eq!(
            build_options(&cli, &inv).unknown_project,
            UnknownProjectPolicy::Fail
        );
    }

    #[test]
    fn dialoguer_needs_terminal_stdin_and_stderr() {
        let cli = cli(&["samba"]);
        assert_eq!(prompt_mode(&cli, &ui(true, true)), PromptMode::Terminal);
        assert_eq!(prompt_mode(&cli, &ui(true, false)), PromptMode::Line);
        assert_eq!(prompt_mode(&cli, &ui(false, true)), PromptMode::Line);
    }

    #[test]
    fn yes_skips_prompting_entirely() {
        let cli = cli(&["--yes", "samba"]);
        assert_eq!(prompt_mode(&cli, &ui(true, true)), PromptMode::Auto);
        assert_eq!(prompt_mode(&cli, &ui(false, false)), PromptMode::Auto);
    }
}
