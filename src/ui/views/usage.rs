use siocopy::{ArgumentMode, ArtifactTable, StagingConfig};

use crate::ui::context::UiContext;
use crate::ui::primitives::text::{styled, ColoredText, Tone};

/// Projects staged through the deployment volume.
///
/// Only the ones in the artifact table work without a file argument;
/// they are marked with `*`.
pub const KNOWN_PROJECTS: &[&str] = &[
    "ansattsøk",
    "helse",
    "studentliv",
    "bris",
    "idrett",
    "basis",
    "samba",
];

const EXAMPLE_FILE: &str = "web/war/target/admin.web-2.7.3.war";
const EXAMPLE_VERSION: &str = "2.7.3";

fn usage_line(mode: ArgumentMode) -> &'static str {
    match mode {
        ArgumentMode::OptionalFile => "siocopy [project] (file) (version)",
        ArgumentMode::RequiredFile => "siocopy --require-file [project] [file] (version)",
    }
}

fn examples(mode: ArgumentMode) -> Vec<String> {
    let mut out = vec![
        format!("siocopy samba {} {}", EXAMPLE_FILE, EXAMPLE_VERSION),
        format!("siocopy samba {}", EXAMPLE_FILE),
    ];
    if mode == ArgumentMode::OptionalFile {
        out.push("siocopy samba".to_string());
    }
    out
}

fn description(config: &StagingConfig, mode: ArgumentMode) -> Vec<String> {
    let mut steps = vec![
        "1. If [version] is not specified, get version from pom.xml in current directory.".to_string(),
        format!(
            "2. Create any missing directories for path: \"{}/[project]/{}/{}--[version]/\"",
            config.volume_name,
            config.year(),
            config.date_stamp()
        ),
    ];
    match mode {
        ArgumentMode::OptionalFile => {
            steps.push("3.- (a or b)".to_string());
            steps.push("3.a. If [file] is specified, copy the given file into path".to_string());
            steps.push(
                "3.b. If [file] is not specified, copy all relevant .war and .zip files for this project into path"
                    .to_string(),
            );
        }
        ArgumentMode::RequiredFile => {
            steps.push("3. Copy the given file into path".to_string());
        }
    }
    steps
}

fn heading(text: &str, color: bool) -> String {
    ColoredText::new(Tone::Usage, text).bold().render(color)
}

fn project_grid(table: &ArtifactTable) -> Vec<String> {
    let batch: Vec<&str> = table.projects().collect();
    let cells: Vec<String> = KNOWN_PROJECTS
        .iter()
        .map(|name| {
            if batch.contains(name) {
                format!("{}*", name)
            } else {
                name.to_string()
            }
        })
        .collect();

    cells
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|cell| format!("{:<12}", cell))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Usage screen shown for a wrong number of parameters
pub fn render_usage(
    received: usize,
    mode: ArgumentMode,
    config: &StagingConfig,
    table: &ArtifactTable,
    ui: &UiContext,
) -> String {
    let c = ui.color;
    let mut out = String::new();

    out.push_str(&format!(
        "\n   {}\n",
        styled(
            Tone::Error,
            &format!(
                "Please provide {} parameters. Received {} parameter(s).",
                mode, received
            ),
            c
        )
    ));

    out.push_str(&format!("\n   {}\n", heading("Usage:", c)));
    out.push_str(&format!("    {}\n\n", usage_line(mode)));
    for example in examples(mode) {
        out.push_str(&format!(
            "      {} {}\n",
            styled(Tone::Success, "e.g:", c),
            example
        ));
    }

    out.push_str(&format!(
        "\n   {}\n",
        heading("This script will:", c)
    ));
    for step in description(config, mode) {
        out.push_str(&format!("    {}\n", step));
    }

    out.push_str(&format!("\n   {}\n", heading("Projects:", c)));
    for row in project_grid(table) {
        out.push_str(&format!("    {}\n", row));
    }
    out.push_str(&format!(
        "    {}\n",
        styled(Tone::Dim, "* copies every artifact when [file] is left out", c)
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::terminal::TerminalCapabilities;
    use chrono::NaiveDate;

    fn ui() -> UiContext {
        UiContext::from_caps(
            0,
            None,
            TerminalCapabilities {
                is_tty: false,
                stdin_is_tty: false,
                stderr_is_tty: false,
                supports_color: false,
                supports_unicode: true,
                is_ci: false,
            },
        )
    }

    fn config() -> StagingConfig {
        StagingConfig::new("/work").with_today(NaiveDate::from_ymd_opt(2016, 11, 2).unwrap())
    }

    #[test]
    fn usage_names_the_received_count_and_range() {
        let out = render_usage(
            0,
            ArgumentMode::OptionalFile,
            &config(),
            &ArtifactTable::builtin(),
            &ui(),
        );
        assert!(out.contains("Please provide 1-3 parameters. Received 0 parameter(s)."));
        assert!(out.contains("siocopy [project] (file) (version)"));
        assert!(out.contains("e.g: siocopy samba\n"));
    }

    #[test]
    fn description_uses_configured_volume_and_date() {
        let out = render_usage(
            4,
            ArgumentMode::OptionalFile,
            &config().with_volume_name("staging"),
            &ArtifactTable::builtin(),
            &ui(),
        );
        assert!(out.contains("\"staging/[project]/2016/2016-11-02--[version]/\""));
        assert!(out.contains("3.b."));
    }

    #[test]
    fn required_file_mode_drops_batch_example() {
        let out = render_usage(
            1,
            ArgumentMode::RequiredFile,
            &config(),
            &ArtifactTable::builtin(),
            &ui(),
        );
        assert!(out.contains("Please provide 2-3 parameters. Received 1 parameter(s)."));
        assert!(!out.contains("e.g: siocopy samba\n"));
        assert!(!out.contains("3.b."));
    }

    #[test]
    fn batch_projects_are_marked() {
        let rows = project_grid(&ArtifactTable::builtin());
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().any(|r| r.contains("bris*")));
        assert!(rows.iter().any(|r| r.contains("samba*")));
        assert!(rows.iter().any(|r| r.contains("helse") && !r.contains("helse*")));
    }
}
