//! # Shell Command Execution (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Every `dotnet` operation in dnproj is a single command line handed to a
//! shell. This module provides the seam for that:
//!
//! - **`ShellExecutor`**: trait with one async `execute(command_line)`.
//! - **`SystemShellExecutor`**: spawns `/bin/sh -c <line>` (or
//!   `cmd.exe /C <line>` on Windows, or the configured `shell.program`),
//!   captures stdout/stderr, and waits for the exit code.
//! - **`DryRunExecutor`**: prints and records the line without spawning
//!   anything. Backs the global `--dry-run` flag.
//! - **`ConfiguredExecutor`**: one of the two, chosen at startup.
//!
//! A non-zero exit code is returned as data in `ShellResult`; only a
//! failure to spawn the shell is an `Err`. There are no retries or timeouts.
//!
//! ## Examples
//!
//! ```rust
//! let executor = SystemShellExecutor::from_config(&config.shell);
//! let result = executor.execute("dotnet --info").await?;
//! if !result.is_success() {
//!     warn!("dotnet failed: {}", result.stderr);
//! }
//! ```
//!
use crate::core::config::ShellConfig;
use crate::core::error::Result;
use anyhow::Context;
use std::borrow::Cow;
use std::process::Stdio;
use std::sync::Mutex;
use tracing::{debug, info};

/// Exit status and captured output of one shell invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ShellResult {
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs a complete command line through a shell.
#[allow(async_fn_in_trait)]
pub trait ShellExecutor {
    async fn execute(&self, command_line: &str) -> Result<ShellResult>;

    /// True when nothing is actually executed, so follow-up file edits must be skipped.
    fn is_dry_run(&self) -> bool {
        false
    }
}

/// Executes command lines with the platform shell.
#[derive(Debug, Clone)]
pub struct SystemShellExecutor {
    program: String,
    command_flag: &'static str,
}

impl Default for SystemShellExecutor {
    fn default() -> Self {
        if cfg!(windows) {
            Self::with_program("cmd.exe")
        } else {
            Self::with_program("/bin/sh")
        }
    }
}

impl SystemShellExecutor {
    /// Uses `shell.program` when configured, otherwise the platform default.
    pub fn from_config(shell: &ShellConfig) -> Self {
        match shell.program.as_deref().filter(|p| !p.trim().is_empty()) {
            Some(program) => Self::with_program(program),
            None => Self::default(),
        }
    }

    /// `cmd`-style shells take `/C`, everything else `-c`.
    pub fn with_program(program: &str) -> Self {
        let stem = std::path::Path::new(program)
            .file_stem()
            .map(|s| s.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        let command_flag = if stem == "cmd" { "/C" } else { "-c" };
        Self {
            program: program.to_string(),
            command_flag,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl ShellExecutor for SystemShellExecutor {
    async fn execute(&self, command_line: &str) -> Result<ShellResult> {
        info!("Executing: {}", command_line);
        debug!("Shell: {} {}", self.program(), self.command_flag);
        let output = tokio::process::Command::new(&self.program)
            .arg(self.command_flag)
            .arg(command_line)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .with_context(|| {
                format!(
                    "Failed to start shell '{}' for command '{}'",
                    self.program, command_line
                )
            })?;

        // Killed by a signal: no exit code.
        let exit_code = output.status.code().unwrap_or(-1);
        let result = ShellResult {
            exit_code,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        debug!("Exit code {} from: {}", exit_code, command_line);
        if !result.stdout.trim().is_empty() {
            debug!("stdout:\n{}", result.stdout.trim_end());
        }
        if !result.stderr.trim().is_empty() {
            debug!("stderr:\n{}", result.stderr.trim_end());
        }
        Ok(result)
    }
}

/// Prints command lines instead of running them.
#[derive(Debug, Default)]
pub struct DryRunExecutor {
    recorded: Mutex<Vec<String>>,
}

impl DryRunExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command line seen so far, in order.
    #[cfg(test)]
    pub fn recorded(&self) -> Vec<String> {
        self.recorded
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }
}

impl ShellExecutor for DryRunExecutor {
    async fn execute(&self, command_line: &str) -> Result<ShellResult> {
        println!("Would run: {}", command_line);
        if let Ok(mut lines) = self.recorded.lock() {
            lines.push(command_line.to_string());
        }
        Ok(ShellResult::default())
    }

    fn is_dry_run(&self) -> bool {
        true
    }
}

/// The executor selected for this invocation.
#[derive(Debug)]
pub enum ConfiguredExecutor {
    System(SystemShellExecutor),
    DryRun(DryRunExecutor),
}

impl ConfiguredExecutor {
    pub fn new(shell: &ShellConfig, dry_run: bool) -> Self {
        if dry_run {
            Self::DryRun(DryRunExecutor::new())
        } else {
            Self::System(SystemShellExecutor::from_config(shell))
        }
    }
}

impl ShellExecutor for ConfiguredExecutor {
    async fn execute(&self, command_line: &str) -> Result<ShellResult> {
        match self {
            Self::System(executor) => executor.execute(command_line).await,
            Self::DryRun(executor) => executor.execute(command_line).await,
        }
    }

    fn is_dry_run(&self) -> bool {
        matches!(self, Self::DryRun(_))
    }
}

/// Characters that never need quoting in either shell.
fn is_plain_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | ':' | '@' | '+' | '=' | ',')
        || (cfg!(windows) && c == '\\')
}

/// Quotes an argument for the platform shell unless it is made only of plain characters.
///
/// `/bin/sh` gets single quotes, with embedded `'` written as `'\''`.
/// `cmd.exe` gets double quotes, with embedded `"` doubled.
pub fn quote_arg(arg: &str) -> Cow<'_, str> {
    if !arg.is_empty() && arg.chars().all(is_plain_char) {
        return Cow::Borrowed(arg);
    }
    if cfg!(windows) {
        Cow::Owned(format!("\"{}\"", arg.replace('"', "\"\"")))
    } else {
        Cow::Owned(format!("'{}'", arg.replace('\'', "'\\''")))
    }
}
