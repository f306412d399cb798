//! # dnproj Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities used by the command handlers and the `dotnet` module,
//! kept apart from command-specific logic (`commands::`) and core
//! infrastructure (`core::`).
//!
//! - **`fs`**: reading files, best-effort deletion, and locating and
//!   rewriting `.csproj` files.
//! - **`process`**: running command lines through the platform shell, or
//!   recording them in dry-run mode.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::project_file::locate_project_file;
//! use crate::common::process::{ShellExecutor, SystemShellExecutor};
//!
//! # async fn run_example() -> crate::core::error::Result<()> {
//! let project = locate_project_file(std::path::Path::new("src/MyProduct.Core"))?;
//! let result = SystemShellExecutor::default().execute("dotnet --version").await?;
//! # Ok(())
//! # }
//! ```
//!

/// Filesystem helpers (I/O, project file lookup and rewrite).
pub mod fs;
/// Shell execution of external commands.
pub mod process;
