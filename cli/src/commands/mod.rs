//! # dnproj Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level command groups of the dnproj CLI
//! and the state shared by their handlers.
//!
//! ## Command Groups
//!
//! - `solution`: create solutions and add projects to them
//! - `project`: create projects, add references, packages and classes,
//!   and edit `.csproj` properties
//!
//! ## Architecture
//!
//! Each group defines an `XArgs` struct with an `XCommand` subcommand enum
//! and an async `handle_x(args, &AppContext)` dispatcher. Handlers build a
//! command object from `crate::dotnet::command`, run it through
//! `run_dotnet`, and report the outcome on stdout.
//!
use crate::common::process::ConfiguredExecutor;
use crate::core::config::{self, Config};
use crate::core::error::Result;
use crate::dotnet::command::{DotnetCli, DotnetCommand, OperationResult};
use tracing::{error, info};

/// Command group for project files. Includes `new`, `reference`, `package`, `class` and `edit`.
pub mod project;
/// Command group for solution files. Includes `new` and `add`.
pub mod solution;

/// Configuration and global flags for one invocation.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Config,
    pub dry_run: bool,
}

impl AppContext {
    pub fn load(dry_run: bool) -> Result<Self> {
        Ok(Self {
            config: config::load_config()?,
            dry_run,
        })
    }

    pub fn dotnet(&self) -> DotnetCli<ConfiguredExecutor> {
        DotnetCli::new(
            &self.config.shell.dotnet,
            ConfiguredExecutor::new(&self.config.shell, self.dry_run),
        )
    }
}

/// Executes a command and turns a non-zero `dotnet` exit into an error.
///
/// The failing command's output is echoed to stderr before returning.
pub async fn run_dotnet<C: DotnetCommand>(
    command: &C,
    ctx: &AppContext,
) -> Result<OperationResult> {
    info!("{} ({})", command.action_name(), command.target().display());
    let result = command.execute(&ctx.dotnet()).await?;
    if !result.is_success() {
        error!("{} failed", command.action_name());
        if !result.shell.stdout.trim().is_empty() {
            eprintln!("{}", result.shell.stdout.trim_end());
        }
    }
    result.ensure_success()
}
