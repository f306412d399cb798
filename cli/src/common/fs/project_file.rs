//! # Project File Access
//!
//! File: cli/src/common/fs/project_file.rs
//!
//! ## Overview
//!
//! Resolves the `.csproj` a user means and holds it open for one
//! read-modify-write cycle.
//!
//! - **`locate_project_file`**: accepts a `.csproj` path, or a directory
//!   containing `<dirname>.csproj` or exactly one `*.csproj`.
//! - **`ProjectFile`**: opened read/write (exclusive share mode on
//!   Windows) so no other process writes it between read and save. Saving
//!   truncates the file and rewrites it in place.
//!
use crate::core::error::{DnprojError, Result};
use anyhow::Context;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Finds the project file for a path given on the command line.
pub fn locate_project_file(path: &Path) -> Result<PathBuf> {
    if path.is_file() {
        return Ok(path.to_path_buf());
    }
    if !path.is_dir() {
        anyhow::bail!(DnprojError::FileSystem(format!(
            "Project file not found: {}",
            path.display()
        )));
    }

    if let Some(dir_name) = path.file_name() {
        let conventional = path.join(format!("{}.csproj", dir_name.to_string_lossy()));
        if conventional.is_file() {
            debug!("Using conventional project file {}", conventional.display());
            return Ok(conventional);
        }
    }

    let mut candidates: Vec<PathBuf> = WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "csproj"))
        .collect();
    candidates.sort();

    match candidates.len() {
        1 => Ok(candidates.remove(0)),
        0 => Err(DnprojError::FileSystem(format!(
            "No .csproj file found in {}",
            path.display()
        ))
        .into()),
        n => Err(DnprojError::FileSystem(format!(
            "{} .csproj files found in {}; specify one",
            n,
            path.display()
        ))
        .into()),
    }
}

/// An open project file.
#[derive(Debug)]
pub struct ProjectFile {
    path: PathBuf,
    file: File,
}

impl ProjectFile {
    pub fn open(path: &Path) -> Result<Self> {
        let mut options = OpenOptions::new();
        options.read(true).write(true);
        #[cfg(windows)]
        {
            use std::os::windows::fs::OpenOptionsExt;
            options.share_mode(0);
        }
        let file = options
            .open(path)
            .with_context(|| format!("Failed to open project file {:?}", path))?;
        debug!("Opened project file {:?}", path);
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn read_to_string(&mut self) -> Result<String> {
        let mut content = String::new();
        self.file
            .seek(SeekFrom::Start(0))
            .and_then(|_| self.file.read_to_string(&mut content))
            .with_context(|| format!("Failed to read project file {:?}", self.path))?;
        Ok(content)
    }

    /// Replaces the whole file content.
    pub fn rewrite(&mut self, content: &str) -> Result<()> {
        self.file
            .set_len(0)
            .and_then(|_| self.file.seek(SeekFrom::Start(0)))
            .and_then(|_| self.file.write_all(content.as_bytes()))
            .and_then(|_| self.file.flush())
            .with_context(|| format!("Failed to write project file {:?}", self.path))?;
        info!("Saved {:?}", self.path);
        Ok(())
    }
}
