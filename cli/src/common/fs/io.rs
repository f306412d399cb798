//! # Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` that add error context and logging:
//! - **`read_file_to_string`**: whole-file read with the path in the error.
//! - **`try_delete`**: removes a file if present and never fails. Used for
//!   the placeholder sources `dotnet new` generates (`Class1.cs`,
//!   `UnitTest1.cs`).
//!
use crate::core::error::Result;
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Deletes a file, ignoring every error. Returns whether a file was removed.
pub fn try_delete(path: &Path) -> bool {
    match fs::remove_file(path) {
        Ok(()) => {
            info!("Deleted {:?}", path);
            true
        }
        Err(e) => {
            debug!("Not deleting {:?}: {}", path, e);
            false
        }
    }
}
