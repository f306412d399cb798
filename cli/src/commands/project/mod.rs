//! # dnproj Project Command Group
//!
//! File: cli/src/commands/project/mod.rs
//!
//! ## Overview
//!
//! `dnproj project <subcommand>`:
//! - `new`: create a project from a template (`dotnet new <template>`)
//! - `reference`: add a project-to-project reference (`dotnet add reference`)
//! - `package`: add a NuGet package (`dotnet add package`)
//! - `class`: add a class from a namespace-qualified name (`dotnet new class`)
//! - `edit`: change properties, friend assemblies and suppressions in a
//!   `.csproj` directly
//!
//! ## Examples
//!
//! ```bash
//! dnproj project new classlib -o src/MyProduct.Core --generate-docs
//! dnproj project reference src/MyProduct.Api src/MyProduct.Core
//! dnproj project package src/MyProduct.Api Serilog --version 4.0.0
//! dnproj project class src/MyProduct.Core Models.Order
//! dnproj project edit src/MyProduct.Core --property Nullable:enable --friend MyProduct.Tests
//! ```
//!
use super::AppContext;
use crate::core::error::Result;
use clap::{Parser, Subcommand};

/// Implements `dnproj project class`.
mod class;
/// Implements `dnproj project edit`.
mod edit;
/// Implements `dnproj project new`.
mod new;
/// Implements `dnproj project package`.
mod package;
/// Implements `dnproj project reference`.
mod reference;

/// Arguments for the `dnproj project` command group.
#[derive(Parser, Debug)]
pub struct ProjectArgs {
    #[command(subcommand)]
    command: ProjectCommand,
}

#[derive(Subcommand, Debug)]
enum ProjectCommand {
    /// Create a new project from a template.
    New(new::NewArgs),
    /// Add a project reference.
    #[command(alias = "ref")]
    Reference(reference::ReferenceArgs),
    /// Add a NuGet package reference.
    #[command(alias = "pkg")]
    Package(package::PackageArgs),
    /// Add a class file.
    Class(class::ClassArgs),
    /// Edit project properties and items.
    Edit(edit::EditArgs),
}

/// Dispatches `dnproj project` subcommands.
pub async fn handle_project(args: ProjectArgs, ctx: &AppContext) -> Result<()> {
    match args.command {
        ProjectCommand::New(args) => new::handle_new(args, ctx).await,
        ProjectCommand::Reference(args) => reference::handle_reference(args, ctx).await,
        ProjectCommand::Package(args) => package::handle_package(args, ctx).await,
        ProjectCommand::Class(args) => class::handle_class(args, ctx).await,
        ProjectCommand::Edit(args) => edit::handle_edit(args, ctx).await,
    }
}
