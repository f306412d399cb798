//! # dnproj Solution Creation Handler
//!
//! File: cli/src/commands/solution/new.rs
//!
//! ## Overview
//!
//! Implements `dnproj solution new`, which runs
//! `dotnet new sln -f <format> -o <dir> -n <name>`.
//!
//! - The output directory defaults to the current directory.
//! - The name defaults to the output directory's final component.
//! - The format is `--format`, else the extension of `--name`
//!   (`MyProduct.slnx`), else `defaults.solution_format` from configuration.
//!
use crate::commands::{run_dotnet, AppContext};
use crate::core::error::Result;
use crate::dotnet::command::{CreateSolution, DotnetCommand};
use crate::dotnet::files::DotnetSolution;
use crate::dotnet::names::SolutionFormat;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(about = "Create a new solution file (dotnet new sln)")]
pub struct NewArgs {
    /// Directory to create the solution in. Defaults to the current directory.
    #[arg(long, short = 'o')]
    output_dir: Option<PathBuf>,

    /// Solution name. Defaults to the output directory name.
    #[arg(long, short = 'n')]
    name: Option<String>,

    /// Solution file format: sln or slnx.
    #[arg(long, short = 'f')]
    format: Option<SolutionFormat>,
}

pub async fn handle_new(args: NewArgs, ctx: &AppContext) -> Result<()> {
    let solution = DotnetSolution::new(args.output_dir, args.name)?;
    let format = match args.format {
        Some(format) => format,
        None if solution.stem() != solution.name() => solution.format(),
        None => ctx.config.defaults.solution_format()?,
    };
    debug!("Solution format: {}", format);

    let command = CreateSolution::new(solution, format);
    run_dotnet(&command, ctx).await?;
    if !ctx.dry_run {
        println!("Created solution {}", command.target().display());
    }
    Ok(())
}
