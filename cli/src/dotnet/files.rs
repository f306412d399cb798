//! # Project and Solution Handles
//!
//! File: cli/src/dotnet/files.rs
//!
//! ## Overview
//!
//! Lightweight descriptions of a `.csproj` or `.sln`/`.slnx` file on disk:
//! a directory plus a name, from which the full path is derived. They do
//! not read or create anything; the command objects do that.
//!
//! Defaults mirror `dotnet new`: a missing directory means the current
//! directory and a missing name means the directory's final component.
//!
use crate::core::error::{DnprojError, Result};
use crate::dotnet::names::SolutionFormat;
use anyhow::Context;
use std::path::{Path, PathBuf};

const PROJECT_EXTENSION: &str = "csproj";

/// A C# project file (`<directory>/<name>.csproj`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotnetProject {
    directory: PathBuf,
    name: String,
}

/// A solution file (`<directory>/<name>.sln` unless the name carries its own extension).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotnetSolution {
    directory: PathBuf,
    name: String,
}

impl DotnetProject {
    pub fn new(directory: Option<PathBuf>, name: Option<String>) -> Result<Self> {
        let (directory, name) = resolve_directory_and_name(directory, name)?;
        Ok(Self { directory, name })
    }

    /// Interprets a user-supplied path: a `.csproj` file, or a project directory.
    pub fn from_path(path: &Path) -> Result<Self> {
        let path = absolutize(path)?;
        if path.extension().is_some_and(|ext| ext == PROJECT_EXTENSION) {
            let name = file_stem(&path)?;
            let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();
            Ok(Self { directory, name })
        } else {
            Self::new(Some(path), None)
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn full_path(&self) -> PathBuf {
        self.directory
            .join(format!("{}.{}", self.name, PROJECT_EXTENSION))
    }
}

impl DotnetSolution {
    pub fn new(directory: Option<PathBuf>, name: Option<String>) -> Result<Self> {
        let (directory, name) = resolve_directory_and_name(directory, name)?;
        Ok(Self { directory, name })
    }

    /// Interprets a user-supplied path: a `.sln`/`.slnx` file, or a directory.
    pub fn from_path(path: &Path) -> Result<Self> {
        let path = absolutize(path)?;
        if solution_format_of(&path.to_string_lossy()).is_some() {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .ok_or_else(|| DnprojError::FileSystem(format!("No file name in {:?}", path)))?;
            let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();
            Ok(Self { directory, name })
        } else {
            Self::new(Some(path), None)
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name without a `.sln`/`.slnx` extension (what `dotnet new sln -n` expects).
    pub fn stem(&self) -> &str {
        match solution_format_of(&self.name) {
            Some(format) => &self.name[..self.name.len() - format.extension().len()],
            None => &self.name,
        }
    }

    pub fn format(&self) -> SolutionFormat {
        solution_format_of(&self.name).unwrap_or(SolutionFormat::Sln)
    }

    pub fn full_path(&self) -> PathBuf {
        if solution_format_of(&self.name).is_some() {
            self.directory.join(&self.name)
        } else {
            self.directory
                .join(format!("{}{}", self.name, SolutionFormat::Sln.extension()))
        }
    }
}

fn solution_format_of(name: &str) -> Option<SolutionFormat> {
    SolutionFormat::ALL
        .iter()
        .copied()
        .find(|format| name.ends_with(format.extension()))
}

fn resolve_directory_and_name(
    directory: Option<PathBuf>,
    name: Option<String>,
) -> Result<(PathBuf, String)> {
    let directory = match directory {
        Some(dir) if !dir.as_os_str().is_empty() => absolutize(&dir)?,
        _ => std::env::current_dir().context("Failed to get current directory")?,
    };
    let name = match name.filter(|n| !n.trim().is_empty()) {
        Some(name) => name,
        None => directory
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                DnprojError::FileSystem(format!(
                    "Cannot derive a name from directory {:?}",
                    directory
                ))
            })?,
    };
    Ok((directory, name))
}

/// Joins relative paths onto the current directory without touching the filesystem.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Ok(cwd.join(path))
    }
}

fn file_stem(path: &Path) -> Result<String> {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| DnprojError::FileSystem(format!("No file name in {:?}", path)).into())
}
