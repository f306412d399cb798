//! # Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers used by the command handlers.
//!
//! - **`io`**: Reading a file to a string with error context, and
//!   best-effort deletion of template scaffold files.
//! - **`project_file`**: Locating a `.csproj` from a user-supplied path and
//!   holding it open read/write for one edit-then-save cycle.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::{io, project_file};
//!
//! let path = project_file::locate_project_file(Path::new("src/Core"))?;
//! let mut file = project_file::ProjectFile::open(&path)?;
//! let xml = file.read_to_string()?;
//! file.rewrite(&xml)?;
//! io::try_delete(&path.with_file_name("Class1.cs"));
//! ```
//!
pub mod io;
pub mod project_file;
