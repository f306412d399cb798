//! # dnproj Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements configuration loading for dnproj. Settings are
//! read from TOML files, merged, expanded and validated before any command
//! runs.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.dnproj.toml` in the current directory or ancestors
//!    (the search stops at a directory containing `.git`)
//! 2. User-specific `<config dir>/dnproj/config.toml`
//! 3. Default values defined in the code
//!
//! ```toml
//! [defaults]
//! framework = "net10.0"
//! generate_documentation_file = false
//! solution_format = "sln"
//!
//! [shell]
//! program = "/bin/bash"
//! dotnet = "~/.dotnet/dotnet"
//!
//! [formatting]
//! indent = true
//! indent_string = "  "
//! ```
//!
//! ## Examples
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let framework = cfg.defaults.framework_name()?;
//! let executor = SystemShellExecutor::from_config(&cfg.shell);
//! ```
//!
use crate::common::fs::io;
use crate::core::error::{DnprojError, Result};
use crate::dotnet::names::{FrameworkName, SolutionFormat};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// The resolved configuration for one invocation.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    pub defaults: DefaultsConfig,
    pub shell: ShellConfig,
    pub formatting: FormattingConfig,
}

/// Default values applied when a command-line option is omitted.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultsConfig {
    /// Target framework used by `project new` when `--framework` is omitted.
    pub framework: String,
    /// Whether new or added projects get `GenerateDocumentationFile=true`.
    pub generate_documentation_file: bool,
    /// Solution file format used by `solution new`.
    pub solution_format: String,
}

/// How `dotnet` is invoked.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    /// Shell used to run command lines. `None` selects the platform shell.
    pub program: Option<String>,
    /// The dotnet executable (name on PATH or full path).
    pub dotnet: String,
}

/// Output formatting of rewritten project files.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattingConfig {
    pub indent: bool,
    pub indent_string: String,
}

/// One configuration file as written. Absent keys stay `None` so that a
/// lower layer can fill them in.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ConfigLayer {
    #[serde(default)]
    defaults: DefaultsLayer,
    #[serde(default)]
    shell: ShellLayer,
    #[serde(default)]
    formatting: FormattingLayer,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct DefaultsLayer {
    framework: Option<String>,
    generate_documentation_file: Option<bool>,
    solution_format: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ShellLayer {
    program: Option<String>,
    dotnet: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct FormattingLayer {
    indent: Option<bool>,
    indent_string: Option<String>,
}

impl ConfigLayer {
    /// Field-by-field merge: every key set in `self` wins over `lower`.
    fn over(self, lower: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            defaults: DefaultsLayer {
                framework: self.defaults.framework.or(lower.defaults.framework),
                generate_documentation_file: self
                    .defaults
                    .generate_documentation_file
                    .or(lower.defaults.generate_documentation_file),
                solution_format: self.defaults.solution_format.or(lower.defaults.solution_format),
            },
            shell: ShellLayer {
                program: self.shell.program.or(lower.shell.program),
                dotnet: self.shell.dotnet.or(lower.shell.dotnet),
            },
            formatting: FormattingLayer {
                indent: self.formatting.indent.or(lower.formatting.indent),
                indent_string: self.formatting.indent_string.or(lower.formatting.indent_string),
            },
        }
    }

    /// Fills every unset key with its built-in default.
    fn resolve(self) -> Config {
        Config {
            defaults: DefaultsConfig {
                framework: self.defaults.framework.unwrap_or_else(default_framework),
                generate_documentation_file: self.defaults.generate_documentation_file.unwrap_or(false),
                solution_format: self
                    .defaults
                    .solution_format
                    .unwrap_or_else(default_solution_format),
            },
            shell: ShellConfig {
                program: self.shell.program,
                dotnet: self.shell.dotnet.unwrap_or_else(default_dotnet),
            },
            formatting: FormattingConfig {
                indent: self.formatting.indent.unwrap_or_else(default_indent),
                indent_string: self
                    .formatting
                    .indent_string
                    .unwrap_or_else(default_indent_string),
            },
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            framework: default_framework(),
            generate_documentation_file: false,
            solution_format: default_solution_format(),
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            program: None,
            dotnet: default_dotnet(),
        }
    }
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            indent_string: default_indent_string(),
        }
    }
}

impl DefaultsConfig {
    /// The configured default framework as a typed value.
    pub fn framework_name(&self) -> Result<FrameworkName> {
        Ok(self.framework.parse::<FrameworkName>()?)
    }

    /// The configured solution format as a typed value.
    pub fn solution_format(&self) -> Result<SolutionFormat> {
        Ok(self.solution_format.parse::<SolutionFormat>()?)
    }
}

fn default_framework() -> String {
    FrameworkName::Net10.to_string()
}
fn default_solution_format() -> String {
    SolutionFormat::Sln.to_string()
}
fn default_dotnet() -> String {
    "dotnet".to_string()
}
fn default_indent() -> bool {
    true
}
fn default_indent_string() -> String {
    "  ".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".dnproj.toml";

/// Loads, merges, expands and validates the configuration for this invocation.
pub fn load_config() -> Result<Config> {
    let user_layer = load_user_config()?.unwrap_or_default();
    let project_layer = load_project_config()?.unwrap_or_default();
    let mut merged_config = project_layer.over(user_layer).resolve();
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<ConfigLayer>> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "dnproj") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<ConfigLayer>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.dnproj.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigLayer> {
    let content = io::read_file_to_string(path)?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn expand_config_paths(config: &mut Config) {
    if let Some(program) = &config.shell.program {
        config.shell.program = Some(shellexpand::tilde(program).into_owned());
    }
    config.shell.dotnet = shellexpand::tilde(&config.shell.dotnet).into_owned();
    debug!("Expanded dotnet executable: {}", config.shell.dotnet);
}

fn validate_config(config: &Config) -> Result<()> {
    config
        .defaults
        .framework_name()
        .map_err(|e| anyhow!(DnprojError::Config(e.to_string())))?;
    config
        .defaults
        .solution_format()
        .map_err(|e| anyhow!(DnprojError::Config(e.to_string())))?;
    if config.shell.dotnet.trim().is_empty() {
        return Err(anyhow!(DnprojError::Config(
            "shell.dotnet cannot be empty.".to_string()
        )));
    }
    if !config.formatting.indent_string.chars().all(char::is_whitespace) {
        return Err(anyhow!(DnprojError::Config(format!(
            "formatting.indent_string must contain only whitespace, got {:?}.",
            config.formatting.indent_string
        ))));
    }
    Ok(())
}
