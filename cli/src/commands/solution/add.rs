//! # dnproj Solution Add Handler
//!
//! File: cli/src/commands/solution/add.rs
//!
//! Implements `dnproj solution add <SOLUTION> <PROJECT>`, which runs
//! `dotnet sln <solution> add <project> --in-root`, or
//! `--solution-folder <folder>` when one is given. With `--generate-docs`
//! (or `defaults.generate_documentation_file = true`) the added project
//! also gets `GenerateDocumentationFile=true`.
//!
use crate::commands::{run_dotnet, AppContext};
use crate::core::error::Result;
use crate::dotnet::command::AddProjectToSolution;
use crate::dotnet::files::{DotnetProject, DotnetSolution};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Add a project to a solution (dotnet sln add)")]
pub struct AddArgs {
    /// Solution file, or the directory containing `<dirname>.sln`.
    solution: PathBuf,

    /// Project file, or the directory containing `<dirname>.csproj`.
    project: PathBuf,

    /// Solution folder to place the project in. Without it the project goes in the solution root.
    #[arg(long)]
    solution_folder: Option<String>,

    /// Set GenerateDocumentationFile=true in the added project.
    #[arg(long)]
    generate_docs: bool,
}

pub async fn handle_add(args: AddArgs, ctx: &AppContext) -> Result<()> {
    let solution = DotnetSolution::from_path(&args.solution)?;
    let project = DotnetProject::from_path(&args.project)?;
    let generate_docs = args.generate_docs || ctx.config.defaults.generate_documentation_file;
    let project_path = project.full_path();

    let command = AddProjectToSolution::new(solution, project)
        .solution_folder(args.solution_folder)
        .generate_documentation_file(generate_docs, &ctx.config.formatting);
    run_dotnet(&command, ctx).await?;
    if !ctx.dry_run {
        println!("Added {} to solution", project_path.display());
    }
    Ok(())
}
