//! # dnproj CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! declares `mod common;` and runs the compiled `dnproj` binary through
//! `assert_cmd`.
//!

// Each test crate uses a different subset of these helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// A minimal SDK-style project file.
pub const MINIMAL_PROJECT: &str = "<Project Sdk=\"Microsoft.NET.Sdk\">\n  <PropertyGroup>\n    <TargetFramework>net8.0</TargetFramework>\n  </PropertyGroup>\n</Project>\n";

/// Returns a `Command` for the compiled `dnproj` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn dnproj_cmd() -> Command {
    Command::cargo_bin("dnproj").expect("Failed to find dnproj binary for testing")
}

/// Writes `<dir>/<name>/<name>.csproj` with `content` and returns its path.
pub fn write_project(dir: &Path, name: &str, content: &str) -> PathBuf {
    let project_dir = dir.join(name);
    fs::create_dir_all(&project_dir).expect("Failed to create project directory");
    let path = project_dir.join(format!("{}.csproj", name));
    fs::write(&path, content).expect("Failed to write project file");
    path
}
