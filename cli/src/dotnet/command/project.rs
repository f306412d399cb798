//! # Project Commands
//!
//! File: cli/src/dotnet/command/project.rs
//!
//! ## Overview
//!
//! Commands that create or modify a single project through `dotnet`:
//!
//! | Command               | Command line                                                       |
//! |-----------------------|--------------------------------------------------------------------|
//! | `CreateProject`       | `dotnet new <template> -o <dir> -n <name> -f <framework>`          |
//! | `AddProjectReference` | `dotnet add reference --project <target> <referenced>`             |
//! | `AddPackageReference` | `dotnet add <project> package <id> [-v <version>] [--prerelease]`  |
//! | `AddClass`            | `dotnet new class --project <p> -o <dir> -n <Name> --language C#`  |
//!
//! `CreateProject` removes the placeholder source file some templates
//! generate (`Class1.cs`, `UnitTest1.cs`) and can enable
//! `GenerateDocumentationFile` in the new project.
//!
use super::{enable_documentation_file, path_arg, DotnetCommand};
use crate::common::fs::io;
use crate::common::process::quote_arg;
use crate::core::config::FormattingConfig;
use crate::core::error::{DnprojError, Result};
use crate::dotnet::files::DotnetProject;
use crate::dotnet::names::{FrameworkName, ProjectTemplate};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CreateProject {
    template: ProjectTemplate,
    project: DotnetProject,
    framework: FrameworkName,
    target: PathBuf,
    generate_documentation_file: bool,
    formatting: FormattingConfig,
}

impl CreateProject {
    pub fn new(template: ProjectTemplate, project: DotnetProject, framework: FrameworkName) -> Self {
        let target = project.full_path();
        Self {
            template,
            project,
            framework,
            target,
            generate_documentation_file: false,
            formatting: FormattingConfig::default(),
        }
    }

    pub fn generate_documentation_file(mut self, enable: bool, formatting: &FormattingConfig) -> Self {
        self.generate_documentation_file = enable;
        self.formatting = formatting.clone();
        self
    }
}

impl DotnetCommand for CreateProject {
    fn target(&self) -> &Path {
        &self.target
    }

    fn action_name(&self) -> String {
        format!("Create {} project", self.template)
    }

    fn arguments(&self) -> String {
        format!(
            "new {} -o {} -n {} -f {}",
            self.template,
            path_arg(self.project.directory()),
            path_arg(Path::new(self.project.name())),
            self.framework
        )
    }

    fn after_success(&self) -> Result<()> {
        if let Some(scaffold) = self.template.scaffold_file() {
            io::try_delete(&self.project.directory().join(scaffold));
        }
        if self.generate_documentation_file {
            enable_documentation_file(&self.target, &self.formatting)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct AddProjectReference {
    project: DotnetProject,
    referenced: DotnetProject,
    target: PathBuf,
}

impl AddProjectReference {
    pub fn new(project: DotnetProject, referenced: DotnetProject) -> Self {
        let target = project.full_path();
        Self {
            project,
            referenced,
            target,
        }
    }
}

impl DotnetCommand for AddProjectReference {
    fn target(&self) -> &Path {
        &self.target
    }

    fn action_name(&self) -> String {
        format!("Add reference to {}", self.referenced.full_path().display())
    }

    fn arguments(&self) -> String {
        format!(
            "add reference --project {} {}",
            path_arg(&self.project.full_path()),
            path_arg(&self.referenced.full_path())
        )
    }
}

#[derive(Debug, Clone)]
pub struct AddPackageReference {
    project: DotnetProject,
    package_id: String,
    version: Option<String>,
    prerelease: bool,
    target: PathBuf,
}

impl AddPackageReference {
    pub fn new(project: DotnetProject, package_id: &str) -> Self {
        let target = project.full_path();
        Self {
            project,
            package_id: package_id.to_string(),
            version: None,
            prerelease: false,
            target,
        }
    }

    pub fn version(mut self, version: Option<String>) -> Self {
        self.version = version.filter(|v| !v.trim().is_empty());
        self
    }

    pub fn prerelease(mut self, prerelease: bool) -> Self {
        self.prerelease = prerelease;
        self
    }
}

impl DotnetCommand for AddPackageReference {
    fn target(&self) -> &Path {
        &self.target
    }

    fn action_name(&self) -> String {
        format!("Add package '{}'", self.package_id)
    }

    fn arguments(&self) -> String {
        let mut arguments = format!(
            "add {} package {}",
            path_arg(&self.project.full_path()),
            quote_arg(&self.package_id)
        );
        if let Some(version) = &self.version {
            arguments.push_str(&format!(" -v {}", quote_arg(version)));
        }
        if self.prerelease {
            arguments.push_str(" --prerelease");
        }
        arguments
    }
}

/// Adds a class from a namespace-qualified name: `Models.Orders.Order`
/// becomes `Order.cs` in `<project dir>/Models/Orders`.
#[derive(Debug, Clone)]
pub struct AddClass {
    project: DotnetProject,
    class_name: String,
    output_dir: PathBuf,
    target: PathBuf,
}

impl AddClass {
    pub fn new(project: DotnetProject, qualified_name: &str) -> Result<Self> {
        let segments: Vec<&str> = qualified_name.trim().split('.').collect();
        if segments.iter().any(|s| s.trim().is_empty()) {
            return Err(DnprojError::MissingArgument(format!(
                "class name '{}'",
                qualified_name
            ))
            .into());
        }
        let (class_name, namespaces) = match segments.split_last() {
            Some((last, rest)) => (last.to_string(), rest),
            None => return Err(DnprojError::MissingArgument("class name".into()).into()),
        };
        let output_dir = namespaces
            .iter()
            .fold(project.directory().to_path_buf(), |dir, segment| dir.join(segment));
        let target = project.full_path();
        Ok(Self {
            project,
            class_name,
            output_dir,
            target,
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl DotnetCommand for AddClass {
    fn target(&self) -> &Path {
        &self.target
    }

    fn action_name(&self) -> String {
        format!("Add class named '{}'", self.class_name)
    }

    fn arguments(&self) -> String {
        format!(
            "new class --project {} -o {} -n {} --language C#",
            path_arg(&self.project.full_path()),
            path_arg(&self.output_dir),
            quote_arg(&self.class_name)
        )
    }
}
