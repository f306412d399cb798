//! # dnproj Solution Command Group
//!
//! File: cli/src/commands/solution/mod.rs
//!
//! ## Overview
//!
//! `dnproj solution <subcommand>`:
//! - `new`: create an empty `.sln`/`.slnx` file (`dotnet new sln`)
//! - `add`: add a project to a solution (`dotnet sln add`)
//!
//! ## Examples
//!
//! ```bash
//! dnproj solution new --output-dir ~/src/MyProduct --format slnx
//! dnproj solution add MyProduct.slnx src/MyProduct.Core --generate-docs
//! dnproj solution add MyProduct.slnx tests/MyProduct.Tests --solution-folder tests
//! ```
//!
use super::AppContext;
use crate::core::error::Result;
use clap::{Parser, Subcommand};

/// Implements `dnproj solution add`.
mod add;
/// Implements `dnproj solution new`.
mod new;

/// Arguments for the `dnproj solution` command group.
#[derive(Parser, Debug)]
pub struct SolutionArgs {
    #[command(subcommand)]
    command: SolutionCommand,
}

#[derive(Subcommand, Debug)]
enum SolutionCommand {
    /// Create a new solution file.
    New(new::NewArgs),
    /// Add a project to a solution.
    Add(add::AddArgs),
}

/// Dispatches `dnproj solution` subcommands.
pub async fn handle_solution(args: SolutionArgs, ctx: &AppContext) -> Result<()> {
    match args.command {
        SolutionCommand::New(args) => new::handle_new(args, ctx).await,
        SolutionCommand::Add(args) => add::handle_add(args, ctx).await,
    }
}
