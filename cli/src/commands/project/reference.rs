//! # dnproj Project Reference Handler
//!
//! File: cli/src/commands/project/reference.rs
//!
//! Implements `dnproj project reference <TARGET> <REFERENCED>`, which runs
//! `dotnet add reference --project <target> <referenced>`. A non-zero
//! `dotnet` exit fails the command.
//!
use crate::commands::{run_dotnet, AppContext};
use crate::core::error::Result;
use crate::dotnet::command::AddProjectReference;
use crate::dotnet::files::DotnetProject;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Add a project reference (dotnet add reference)")]
pub struct ReferenceArgs {
    /// Project that receives the reference (file or directory).
    target: PathBuf,

    /// Project being referenced (file or directory).
    referenced: PathBuf,
}

pub async fn handle_reference(args: ReferenceArgs, ctx: &AppContext) -> Result<()> {
    let target = DotnetProject::from_path(&args.target)?;
    let referenced = DotnetProject::from_path(&args.referenced)?;
    let message = format!(
        "Added reference from {} to {}",
        target.name(),
        referenced.name()
    );

    run_dotnet(&AddProjectReference::new(target, referenced), ctx).await?;
    if !ctx.dry_run {
        println!("{}", message);
    }
    Ok(())
}
