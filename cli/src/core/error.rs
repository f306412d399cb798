//! # dnproj Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout dnproj. It follows
//! a two-layer approach:
//! - `DnprojError`: a `thiserror` enum naming the specific failure kinds
//!   the application can recognise and match on.
//! - `Result<T>`: an alias for `anyhow::Result<T>` so handlers can add
//!   context (`.with_context(..)`) while still carrying a `DnprojError`
//!   that callers may `downcast_ref`.
//!
//! The error kinds cover:
//! - Malformed project files (wrong root element, missing `<PropertyGroup>`)
//! - XML parsing and writing failures
//! - Missing or malformed user arguments
//! - Unsupported constant values (framework, template, output type, scope)
//! - Configuration and filesystem errors
//! - `dotnet` processes that exited with a non-zero status
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if category.trim().is_empty() {
//!     return Err(DnprojError::MissingArgument("category".into()).into());
//! }
//!
//! // Check for a specific error kind
//! if let Some(DnprojError::InvalidProject(msg)) = err.downcast_ref::<DnprojError>() {
//!     eprintln!("not a project file: {msg}");
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for dnproj.
#[derive(Error, Debug)]
pub enum DnprojError {
    #[error("Invalid project file: {0}")]
    InvalidProject(String),

    #[error("Failed to parse project XML: {source}")]
    XmlParse {
        #[from]
        source: xmltree::ParseError,
    },

    #[error("Failed to write project XML: {source}")]
    XmlWrite {
        #[from]
        source: xmltree::Error,
    },

    #[error("Missing or empty argument: {0}")]
    MissingArgument(String),

    #[error("Unsupported {kind} '{value}'")]
    UnsupportedValue { kind: &'static str, value: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("External command failed: {cmd}, Status: {status}, Output:\n{output}")]
    ExternalCommand {
        cmd: String,
        status: i32,
        output: String,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
