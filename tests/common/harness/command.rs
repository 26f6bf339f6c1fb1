//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `noteblob` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct BlobCommand {
    args: Vec<String>,
    stdin: Option<String>,
    config_home: Option<PathBuf>,
}

impl BlobCommand {
    /// Creates a new command for the `noteblob` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            stdin: None,
            config_home: None,
        }
    }

    /// Points config lookup at `dir` so the user's own config is never read.
    pub fn config_home(mut self, dir: &Path) -> Self {
        self.config_home = Some(dir.to_path_buf());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Adds a path argument.
    pub fn path(self, path: &Path) -> Self {
        let arg = path.to_string_lossy().to_string();
        self.args([arg])
    }

    /// Feeds `text` to the command's stdin.
    pub fn stdin(mut self, text: &str) -> Self {
        self.stdin = Some(text.to_string());
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("noteblob").expect("Failed to find noteblob binary");
        cmd.args(&self.args);
        cmd.env_remove("NOTEBLOB_LOG");
        if let Some(dir) = &self.config_home {
            cmd.env("XDG_CONFIG_HOME", dir).env("HOME", dir);
        }
        cmd.write_stdin(self.stdin.unwrap_or_default());
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `show` command.
    pub fn show(self) -> Self {
        self.args(["show"])
    }

    /// Configures for the `format` command.
    pub fn format(self) -> Self {
        self.args(["format"])
    }

    /// Configures for the `normalize` command.
    pub fn normalize(self) -> Self {
        self.args(["normalize"])
    }

    /// Configures for the `merge` command.
    pub fn merge(self) -> Self {
        self.args(["merge"])
    }

    /// Configures for the `link` command.
    pub fn link(self) -> Self {
        self.args(["link"])
    }

    /// Configures for the `unlink` command.
    pub fn unlink(self) -> Self {
        self.args(["unlink"])
    }

    /// Configures for the `critical` command.
    pub fn critical(self) -> Self {
        self.args(["critical"])
    }

    /// Configures for the `uncritical` command.
    pub fn uncritical(self) -> Self {
        self.args(["uncritical"])
    }

    // ===========================================
    // Options
    // ===========================================

    /// Reads input from stdin (`-`).
    pub fn from_stdin(self) -> Self {
        self.args(["-"])
    }

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }

    /// Adds `--in-place` to the command.
    pub fn in_place(self) -> Self {
        self.args(["--in-place"])
    }
}

impl Default for BlobCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_runs_binary() {
        BlobCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_output_success() {
        let output = BlobCommand::new().args(["--help"]).output_success();
        assert!(output.contains("noteblob") || output.contains("notes"));
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = BlobCommand::new().link().from_stdin().args(["A"]);
        assert_eq!(cmd.get_args(), &["link", "-", "A"]);
    }
}
