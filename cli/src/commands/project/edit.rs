//! # dnproj Project Edit Handler
//!
//! File: cli/src/commands/project/edit.rs
//!
//! ## Overview
//!
//! Implements `dnproj project edit [PATH]`, which edits a `.csproj` in place
//! without invoking `dotnet`:
//! - `--property Name:Value`: upsert a supported `<PropertyGroup>` property
//! - `--friend A`: add `<InternalsVisibleTo>A</InternalsVisibleTo>`
//! - `--remove-friend A`: remove the `<ItemGroup>` holding the matching
//!   `InternalsVisibleTo` entry
//! - `--suppress-category C --suppress-check-id I`: add a
//!   `SuppressMessageAttribute` assembly attribute
//!
//! All edits are applied to the parsed document first. The file is rewritten
//! once, and only when at least one edit changed something. With `--dry-run`
//! the edits are evaluated but nothing is written.
//!
//! ## Usage
//!
//! ```bash
//! dnproj project edit --property TargetFramework:net9.0 --property Nullable:enable
//! dnproj project edit src/MyProduct.Core --friend MyProduct.Tests
//! dnproj project edit src/MyProduct.Core/MyProduct.Core.csproj \
//!     --suppress-category Microsoft.Design --suppress-check-id CA1062 \
//!     --suppress-scope module
//! ```
//!
use crate::commands::AppContext;
use crate::common::fs::io::read_file_to_string;
use crate::common::fs::project_file::locate_project_file;
use crate::core::error::Result;
use crate::dotnet::command::edit_project_file;
use crate::dotnet::names::SuppressMessageScope;
use crate::dotnet::project_config::{ProjectConfigurationService, SuppressMessage};
use crate::dotnet::property::{parse_requests, PropertySetting};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(about = "Edit properties and items of a project file")]
pub struct EditArgs {
    /// Project file, or a directory containing one.
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Property to set, as Name:Value. May be repeated.
    #[arg(long = "property", value_name = "NAME:VALUE")]
    properties: Vec<String>,

    /// Assembly to grant access to internal members. May be repeated.
    #[arg(long = "friend", value_name = "ASSEMBLY")]
    friends: Vec<String>,

    /// Friend assembly to remove. May be repeated.
    #[arg(long = "remove-friend", value_name = "ASSEMBLY")]
    remove_friends: Vec<String>,

    /// Category of a SuppressMessageAttribute to add.
    #[arg(long, requires = "suppress_check_id")]
    suppress_category: Option<String>,

    /// Check id of a SuppressMessageAttribute to add.
    #[arg(long, requires = "suppress_category")]
    suppress_check_id: Option<String>,

    /// Justification for the suppression.
    #[arg(long, requires = "suppress_category")]
    suppress_justification: Option<String>,

    /// Scope of the suppression.
    #[arg(long, requires = "suppress_category")]
    suppress_scope: Option<SuppressMessageScope>,
}

/// Everything one `project edit` invocation will apply, validated up front.
#[derive(Debug, Default)]
struct EditPlan {
    settings: Vec<PropertySetting>,
    friends: Vec<String>,
    remove_friends: Vec<String>,
    suppression: Option<SuppressMessage>,
}

impl EditPlan {
    fn from_args(args: &EditArgs) -> Result<Self> {
        let suppression = match (&args.suppress_category, &args.suppress_check_id) {
            (Some(category), Some(check_id)) => {
                let mut message = SuppressMessage::new(category.as_str(), check_id.as_str());
                if let Some(justification) = &args.suppress_justification {
                    message = message.with_justification(justification.as_str());
                }
                if let Some(scope) = args.suppress_scope {
                    message = message.with_scope(scope);
                }
                Some(message)
            }
            _ => None,
        };

        Ok(Self {
            settings: parse_requests(&args.properties)?,
            friends: args.friends.clone(),
            remove_friends: args.remove_friends.clone(),
            suppression,
        })
    }

    fn is_empty(&self) -> bool {
        self.settings.is_empty()
            && self.friends.is_empty()
            && self.remove_friends.is_empty()
            && self.suppression.is_none()
    }

    fn apply(&self, service: &mut ProjectConfigurationService) -> Result<()> {
        for setting in &self.settings {
            debug!(
                "{}: {:?} -> {}",
                setting.element_name(),
                service.property(setting.element_name()),
                setting.value_text()
            );
            service.apply(setting)?;
        }
        for friend in &self.friends {
            service.add_friend_assembly(friend)?;
        }
        for friend in &self.remove_friends {
            service.remove_friend_assembly(friend);
        }
        if let Some(message) = &self.suppression {
            service.add_suppress_message(message)?;
        }
        Ok(())
    }
}

pub async fn handle_edit(args: EditArgs, ctx: &AppContext) -> Result<()> {
    let path = locate_project_file(&args.path)?;
    let plan = EditPlan::from_args(&args)?;
    if plan.is_empty() {
        println!("Nothing to change in {}", path.display());
        return Ok(());
    }

    if ctx.dry_run {
        let mut service = ProjectConfigurationService::parse(&read_file_to_string(&path)?)?;
        plan.apply(&mut service)?;
        if service.has_changed() {
            println!("Would update {}", path.display());
        } else {
            println!("No changes to {}", path.display());
        }
        return Ok(());
    }

    if edit_project_file(&path, &ctx.config.formatting, |service| plan.apply(service))? {
        info!("Rewrote {}", path.display());
        println!("Updated {}", path.display());
    } else {
        println!("No changes to {}", path.display());
    }
    Ok(())
}
