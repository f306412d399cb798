//! # dotnet Domain
//!
//! File: cli/src/dotnet/mod.rs
//!
//! ## Overview
//!
//! Everything dnproj knows about .NET projects, independent of the CLI:
//! - `names`: supported frameworks, templates, output types, scopes and
//!   solution formats
//! - `files`: `DotnetProject` / `DotnetSolution` path handles
//! - `property`: parsing `Name:Value` property edit requests
//! - `project_config`: the idempotent `.csproj` editor
//! - `command`: one struct per `dotnet` CLI operation
//!
pub mod command;
pub mod files;
pub mod names;
pub mod project_config;
pub mod property;
