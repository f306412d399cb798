//! # dotnet Command Objects
//!
//! File: cli/src/dotnet/command/mod.rs
//!
//! ## Overview
//!
//! Each supported `dotnet` operation is a struct implementing
//! `DotnetCommand`. A command knows:
//! - its **target** (the file or directory it affects),
//! - a human-readable **action name** (used for logging and `--dry-run`),
//! - the **arguments** that follow the `dotnet` executable,
//! - optional **follow-up work** after a successful run (deleting template
//!   scaffold files, enabling `GenerateDocumentationFile`).
//!
//! ## Architecture
//!
//! `DotnetCli` pairs the `dotnet` executable with a `ShellExecutor`.
//! `DotnetCommand::execute` builds the full command line, hands it to the
//! executor, waits for completion, and returns an `OperationResult`. A
//! non-zero exit is data here; `OperationResult::ensure_success` turns it
//! into `DnprojError::ExternalCommand` for callers that want an error.
//! Follow-up work is skipped when the run failed or was a dry run.
//!
//! - `solution`: `CreateSolution`, `AddProjectToSolution`
//! - `project`: `CreateProject`, `AddProjectReference`,
//!   `AddPackageReference`, `AddClass`
//!
//! ## Examples
//!
//! ```rust
//! let dotnet = DotnetCli::new(&config.shell.dotnet, SystemShellExecutor::from_config(&config.shell));
//! let command = AddPackageReference::new(project, "Serilog").prerelease(true);
//! let result = command.execute(&dotnet).await?.ensure_success()?;
//! println!("{}", result.shell.stdout);
//! ```
//!
pub mod project;
pub mod solution;

pub use project::{AddClass, AddPackageReference, AddProjectReference, CreateProject};
pub use solution::{AddProjectToSolution, CreateSolution};

use crate::common::fs::project_file::ProjectFile;
use crate::common::process::{quote_arg, ShellExecutor, ShellResult};
use crate::core::config::FormattingConfig;
use crate::core::error::{DnprojError, Result};
use crate::dotnet::project_config::ProjectConfigurationService;
use std::path::Path;
use tracing::{debug, info, warn};

/// The `dotnet` executable plus the executor that runs it.
#[derive(Debug)]
pub struct DotnetCli<E> {
    program: String,
    executor: E,
}

impl<E: ShellExecutor> DotnetCli<E> {
    pub fn new(program: &str, executor: E) -> Self {
        Self {
            program: program.to_string(),
            executor,
        }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Full command line for `arguments`.
    pub fn command_line(&self, arguments: &str) -> String {
        format!("{} {}", quote_arg(&self.program), arguments)
    }
}

/// Result of one command: the command line run and what the shell reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationResult {
    pub operation_text: String,
    pub shell: ShellResult,
}

impl OperationResult {
    pub fn is_success(&self) -> bool {
        self.shell.is_success()
    }

    /// Converts a non-zero exit into `DnprojError::ExternalCommand`.
    pub fn ensure_success(self) -> Result<Self> {
        if self.is_success() {
            return Ok(self);
        }
        let output = if self.shell.stderr.trim().is_empty() {
            self.shell.stdout.trim_end().to_string()
        } else {
            self.shell.stderr.trim_end().to_string()
        };
        Err(DnprojError::ExternalCommand {
            cmd: self.operation_text,
            status: self.shell.exit_code,
            output,
        }
        .into())
    }
}

/// A single `dotnet` invocation.
#[allow(async_fn_in_trait)]
pub trait DotnetCommand {
    /// File or directory the command affects.
    fn target(&self) -> &Path;

    fn action_name(&self) -> String;

    /// Everything after the `dotnet` executable.
    fn arguments(&self) -> String;

    /// Runs after a successful, non-dry-run execution.
    fn after_success(&self) -> Result<()> {
        Ok(())
    }

    async fn execute<E: ShellExecutor>(&self, dotnet: &DotnetCli<E>) -> Result<OperationResult> {
        let operation_text = dotnet.command_line(&self.arguments());
        info!("{}: {}", self.action_name(), self.target().display());
        let shell = dotnet.executor().execute(&operation_text).await?;
        let result = OperationResult {
            operation_text,
            shell,
        };

        if !result.is_success() {
            warn!(
                "'{}' exited with code {}",
                result.operation_text, result.shell.exit_code
            );
        } else if dotnet.executor().is_dry_run() {
            debug!("Dry run, skipping follow-up for {}", self.target().display());
        } else {
            self.after_success()?;
        }
        Ok(result)
    }
}

/// Loads a project file, applies `edit`, and saves only if something changed.
///
/// Returns whether the file was rewritten.
pub fn edit_project_file<F>(path: &Path, formatting: &FormattingConfig, edit: F) -> Result<bool>
where
    F: FnOnce(&mut ProjectConfigurationService) -> Result<()>,
{
    let mut file = ProjectFile::open(path)?;
    let xml = file.read_to_string()?;
    let mut service = ProjectConfigurationService::parse(&xml)?;
    edit(&mut service)?;
    if !service.has_changed() {
        debug!("No changes to {}", path.display());
        return Ok(false);
    }
    file.rewrite(&service.to_xml_string(formatting)?)?;
    Ok(true)
}

pub(crate) fn enable_documentation_file(path: &Path, formatting: &FormattingConfig) -> Result<()> {
    if edit_project_file(path, formatting, |service| {
        service.set_generate_documentation_file(true)
    })? {
        info!("Enabled GenerateDocumentationFile in {}", path.display());
    }
    Ok(())
}

fn path_arg(path: &Path) -> String {
    quote_arg(&path.to_string_lossy()).into_owned()
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Records command lines and answers with a fixed exit code.
    #[derive(Debug, Default)]
    pub struct RecordingExecutor {
        pub lines: RefCell<Vec<String>>,
        pub exit_code: i32,
    }

    impl RecordingExecutor {
        pub fn failing(exit_code: i32) -> Self {
            Self {
                lines: RefCell::new(Vec::new()),
                exit_code,
            }
        }
    }

    impl ShellExecutor for RecordingExecutor {
        async fn execute(&self, command_line: &str) -> Result<ShellResult> {
            self.lines.borrow_mut().push(command_line.to_string());
            Ok(ShellResult {
                exit_code: self.exit_code,
                stdout: String::new(),
                stderr: if self.exit_code == 0 {
                    String::new()
                } else {
                    "error NU1101".to_string()
                },
            })
        }
    }

    pub fn dotnet(executor: RecordingExecutor) -> DotnetCli<RecordingExecutor> {
        DotnetCli::new("dotnet", executor)
    }
}
