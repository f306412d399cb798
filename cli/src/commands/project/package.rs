//! # dnproj Package Reference Handler
//!
//! File: cli/src/commands/project/package.rs
//!
//! Implements `dnproj project package <PROJECT> <PACKAGE_ID>`, which runs
//! `dotnet add <project> package <id> [-v <version>] [--prerelease]`.
//!
use crate::commands::{run_dotnet, AppContext};
use crate::core::error::Result;
use crate::dotnet::command::AddPackageReference;
use crate::dotnet::files::DotnetProject;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    about = "Add a NuGet package reference (dotnet add package)",
    disable_version_flag = true
)]
pub struct PackageArgs {
    /// Project file or directory.
    project: PathBuf,

    /// NuGet package id.
    package_id: String,

    /// Package version. Latest stable when omitted.
    #[arg(long)]
    version: Option<String>,

    /// Allow prerelease versions.
    #[arg(long)]
    prerelease: bool,
}

pub async fn handle_package(args: PackageArgs, ctx: &AppContext) -> Result<()> {
    let project = DotnetProject::from_path(&args.project)?;
    let project_name = project.name().to_string();
    let command = AddPackageReference::new(project, &args.package_id)
        .version(args.version)
        .prerelease(args.prerelease);

    run_dotnet(&command, ctx).await?;
    if !ctx.dry_run {
        println!("Added package {} to {}", args.package_id, project_name);
    }
    Ok(())
}
