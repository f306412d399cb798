//! # dnproj Add Class Handler
//!
//! File: cli/src/commands/project/class.rs
//!
//! Implements `dnproj project class <PROJECT> <QUALIFIED_NAME>`. The
//! namespace segments become directories under the project:
//! `Models.Orders.Order` runs
//! `dotnet new class --project <p> -o <projectdir>/Models/Orders -n Order --language C#`.
//!
use crate::commands::{run_dotnet, AppContext};
use crate::core::error::Result;
use crate::dotnet::command::AddClass;
use crate::dotnet::files::DotnetProject;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Add a C# class to a project (dotnet new class)")]
pub struct ClassArgs {
    /// Project file or directory.
    project: PathBuf,

    /// Class name, optionally namespace-qualified (e.g. Models.Order).
    qualified_name: String,
}

pub async fn handle_class(args: ClassArgs, ctx: &AppContext) -> Result<()> {
    let project = DotnetProject::from_path(&args.project)?;
    let command = AddClass::new(project, &args.qualified_name)?;

    run_dotnet(&command, ctx).await?;
    if !ctx.dry_run {
        println!(
            "Added class {} in {}",
            args.qualified_name,
            command.output_dir().display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_args_parsing() {
        let args = ClassArgs::try_parse_from(["class", "src/Core", "Models.Order"]).unwrap();
        assert_eq!(args.project, PathBuf::from("src/Core"));
        assert_eq!(args.qualified_name, "Models.Order");
    }
}
