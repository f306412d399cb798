//! # dnproj Project Creation Handler
//!
//! File: cli/src/commands/project/new.rs
//!
//! ## Overview
//!
//! Implements `dnproj project new <TEMPLATE>`, which runs
//! `dotnet new <template> -o <dir> -n <name> -f <framework>`.
//!
//! After `dotnet` succeeds:
//! - `Class1.cs` (classlib) or `UnitTest1.cs` (xunit, xunit3) is deleted.
//! - With `--generate-docs` (or `defaults.generate_documentation_file`),
//!   `GenerateDocumentationFile=true` is written to the new project.
//!
//! ## Usage
//!
//! ```bash
//! dnproj project new classlib --output-dir src/MyProduct.Core
//! dnproj project new xunit3 -o tests/MyProduct.Tests -f net9.0
//! ```
//!
use crate::commands::{run_dotnet, AppContext};
use crate::core::error::Result;
use crate::dotnet::command::{CreateProject, DotnetCommand};
use crate::dotnet::files::DotnetProject;
use crate::dotnet::names::{FrameworkName, ProjectTemplate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Create a new project from a template (dotnet new)")]
pub struct NewArgs {
    /// Template: xunit, xunit3, console, classlib, blazor, worker, webapi or winforms.
    template: ProjectTemplate,

    /// Directory to create the project in. Defaults to the current directory.
    #[arg(long, short = 'o')]
    output_dir: Option<PathBuf>,

    /// Project name. Defaults to the output directory name.
    #[arg(long, short = 'n')]
    name: Option<String>,

    /// Target framework. Defaults to `defaults.framework` from configuration.
    #[arg(long, short = 'f')]
    framework: Option<FrameworkName>,

    /// Set GenerateDocumentationFile=true in the new project.
    #[arg(long)]
    generate_docs: bool,
}

pub async fn handle_new(args: NewArgs, ctx: &AppContext) -> Result<()> {
    let project = DotnetProject::new(args.output_dir, args.name)?;
    let framework = match args.framework {
        Some(framework) => framework,
        None => ctx.config.defaults.framework_name()?,
    };
    let generate_docs = args.generate_docs || ctx.config.defaults.generate_documentation_file;

    let command = CreateProject::new(args.template, project, framework)
        .generate_documentation_file(generate_docs, &ctx.config.formatting);
    run_dotnet(&command, ctx).await?;
    if !ctx.dry_run {
        println!("Created {} project {}", args.template, command.target().display());
    }
    Ok(())
}
