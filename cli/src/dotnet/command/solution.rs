//! # Solution Commands
//!
//! File: cli/src/dotnet/command/solution.rs
//!
//! `dotnet new sln` and `dotnet sln add`.
//!
use super::{enable_documentation_file, path_arg, DotnetCommand};
use crate::core::config::FormattingConfig;
use crate::core::error::Result;
use crate::dotnet::files::{DotnetProject, DotnetSolution};
use crate::dotnet::names::SolutionFormat;
use std::path::{Path, PathBuf};

/// `dotnet new sln -f <format> -o <dir> -n <name>`
#[derive(Debug, Clone)]
pub struct CreateSolution {
    solution: DotnetSolution,
    format: SolutionFormat,
    target: PathBuf,
}

impl CreateSolution {
    pub fn new(solution: DotnetSolution, format: SolutionFormat) -> Self {
        let target = solution
            .directory()
            .join(format!("{}{}", solution.stem(), format.extension()));
        Self {
            solution,
            format,
            target,
        }
    }
}

impl DotnetCommand for CreateSolution {
    fn target(&self) -> &Path {
        &self.target
    }

    fn action_name(&self) -> String {
        "Create .NET solution file".to_string()
    }

    fn arguments(&self) -> String {
        format!(
            "new sln -f {} -o {} -n {}",
            self.format,
            path_arg(self.solution.directory()),
            path_arg(Path::new(self.solution.stem()))
        )
    }
}

/// `dotnet sln <solution> add <project> (--in-root | --solution-folder <folder>)`
#[derive(Debug, Clone)]
pub struct AddProjectToSolution {
    solution: DotnetSolution,
    project: DotnetProject,
    solution_folder: Option<String>,
    target: PathBuf,
    generate_documentation_file: bool,
    formatting: FormattingConfig,
}

impl AddProjectToSolution {
    pub fn new(solution: DotnetSolution, project: DotnetProject) -> Self {
        let target = solution.full_path();
        Self {
            solution,
            project,
            solution_folder: None,
            target,
            generate_documentation_file: false,
            formatting: FormattingConfig::default(),
        }
    }

    /// Places the project under a solution folder instead of the solution root.
    pub fn solution_folder(mut self, folder: Option<String>) -> Self {
        self.solution_folder = folder.filter(|f| !f.trim().is_empty());
        self
    }

    /// Also sets `GenerateDocumentationFile=true` in the added project.
    pub fn generate_documentation_file(mut self, enable: bool, formatting: &FormattingConfig) -> Self {
        self.generate_documentation_file = enable;
        self.formatting = formatting.clone();
        self
    }
}

impl DotnetCommand for AddProjectToSolution {
    fn target(&self) -> &Path {
        &self.target
    }

    fn action_name(&self) -> String {
        format!("Add {} to solution", self.project.full_path().display())
    }

    fn arguments(&self) -> String {
        let placement = match &self.solution_folder {
            Some(folder) => format!(" --solution-folder {}", path_arg(Path::new(folder))),
            None => " --in-root".to_string(),
        };
        format!(
            "sln {} add {}{}",
            path_arg(&self.solution.full_path()),
            path_arg(&self.project.full_path()),
            placement
        )
    }

    fn after_success(&self) -> Result<()> {
        if self.generate_documentation_file {
            enable_documentation_file(&self.project.full_path(), &self.formatting)?;
        }
        Ok(())
    }
}
