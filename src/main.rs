//! siocopy CLI - stage release artifacts on the deployment volume
//!
//! Usage: siocopy [OPTIONS] <project> [file] [version]

mod cli;
mod commands;
mod ui;

use clap::Parser;

use crate::cli::Cli;
use crate::ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    let ui = UiContext::new(cli.verbose, cli.color);

    if let Err(err) = commands::stage::cmd_stage(&cli, &ui) {
        ui::error::print_error(&err, &ui);
        std::process::exit(ui::error::exit_code(&err));
    }
}
