//! Test environment builder for isolated siocopy runs.
//!
//! Provides `TestEnv` - a temp project checkout (the working directory) and a
//! temp volumes root standing in for `/Volumes`.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

use super::fixtures::{TODAY, YEAR};

/// Result of running the siocopy binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

pub struct TestEnv {
    /// Working directory the binary runs in
    pub project_root: TempDir,
    /// Stand-in for `/Volumes`
    pub volumes_root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Environment with the `sioapps` volume mounted
    pub fn new() -> Self {
        let env = Self::unmounted();
        std::fs::create_dir_all(env.mount_point()).unwrap();
        env
    }

    /// Environment with an empty volumes root
    pub fn unmounted() -> Self {
        Self {
            project_root: TempDir::new().unwrap(),
            volumes_root: TempDir::new().unwrap(),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_siocopy")),
        }
    }

    pub fn mount_point(&self) -> PathBuf {
        self.volumes_root.path().join("sioapps")
    }

    /// `<mount>/<PROJECT>/<YEAR>/<TODAY>--<version>`
    pub fn release_dir(&self, project: &str, version: &str) -> PathBuf {
        self.mount_point()
            .join(project)
            .join(YEAR)
            .join(format!("{}--{}", TODAY, version))
    }

    /// Get path relative to the checkout
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file into the checkout, creating parent directories
    pub fn write_project_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Create `<mount>/<project>` ahead of the run so no prompt is needed
    pub fn with_project_dir(self, project: &str) -> Self {
        std::fs::create_dir_all(self.mount_point().join(project)).unwrap();
        self
    }

    /// Run with stdin closed
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_input(args, "")
    }

    /// Run with `input` piped to stdin
    pub fn run_with_input(&self, args: &[&str], input: &str) -> TestResult {
        self.run_from_with_input(self.project_root.path(), args, input)
    }

    pub fn run_from_with_input(&self, cwd: &Path, args: &[&str], input: &str) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .arg("--volumes-root")
            .arg(self.volumes_root.path())
            .args(["--today", TODAY, "--color", "never"])
            .args(args)
            .env("NO_COLOR", "1")
            .env("LC_ALL", "C.UTF-8")
            .env_remove("CI")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd.spawn().expect("Failed to execute siocopy");
        if let Some(mut stdin) = child.stdin.take() {
            // The binary may exit before reading everything.
            let _ = stdin.write_all(input.as_bytes());
        }
        let output = child.wait_with_output().expect("Failed to wait for siocopy");

        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
