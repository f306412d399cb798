//! # Property Edit Requests
//!
//! File: cli/src/dotnet/property.rs
//!
//! Turns `Name:Value` pairs from the command line into typed
//! `PropertySetting`s that the project configuration service can apply.
//!
//! - Boolean properties accept `true`/`false` in any case, surrounding
//!   whitespace ignored. `Nullable` also accepts `enable`/`disable`.
//! - `OutputType` and `TargetFramework` must name a supported value.
//! - Everything else is free text.
//!
//! Unknown properties and bad values are reported with `warn!` and
//! skipped. A pair without a `:` or with an empty side is an error.
//!
use crate::core::error::{DnprojError, Result};
use crate::dotnet::names::{AssemblyOutputType, FrameworkName};
use tracing::{debug, warn};

/// One property assignment for the first `<PropertyGroup>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertySetting {
    AppendTargetFrameworkToOutputPath(bool),
    AssemblyName(String),
    GenerateDocumentationFile(bool),
    IntermediateOutputPath(String),
    LangVersion(String),
    Nullable(bool),
    OutputType(AssemblyOutputType),
    OutputPath(String),
    RestorePackagesWithLockFile(bool),
    TargetFramework(FrameworkName),
    Version(String),
    VersionPrefix(String),
    VersionSuffix(String),
}

/// Element names of every property `PropertySetting` can express.
pub const SUPPORTED_PROPERTIES: &[&str] = &[
    "AppendTargetFrameworkToOutputPath",
    "AssemblyName",
    "GenerateDocumentationFile",
    "IntermediateOutputPath",
    "LangVersion",
    "Nullable",
    "OutputType",
    "OutputPath",
    "RestorePackagesWithLockFile",
    "TargetFramework",
    "Version",
    "VersionPrefix",
    "VersionSuffix",
];

impl PropertySetting {
    /// Builds a setting from a property name (matched ignoring ASCII case) and its raw value.
    pub fn parse(name: &str, value: &str) -> Result<Self> {
        let canonical = SUPPORTED_PROPERTIES
            .iter()
            .copied()
            .find(|p| p.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| DnprojError::UnsupportedValue {
                kind: "property",
                value: name.to_string(),
            })?;

        let unsupported_value = || DnprojError::UnsupportedValue {
            kind: "property value",
            value: format!("{}={}", canonical, value),
        };
        let flag = || parse_bool(value).ok_or_else(unsupported_value);
        let text = value.to_string();

        let setting = match canonical {
            "AppendTargetFrameworkToOutputPath" => Self::AppendTargetFrameworkToOutputPath(flag()?),
            "AssemblyName" => Self::AssemblyName(text),
            "GenerateDocumentationFile" => Self::GenerateDocumentationFile(flag()?),
            "IntermediateOutputPath" => Self::IntermediateOutputPath(text),
            "LangVersion" => Self::LangVersion(text),
            "Nullable" => match value.trim() {
                "enable" => Self::Nullable(true),
                "disable" => Self::Nullable(false),
                _ => Self::Nullable(flag()?),
            },
            "OutputType" => Self::OutputType(value.trim().parse().map_err(|_| unsupported_value())?),
            "OutputPath" => Self::OutputPath(text),
            "RestorePackagesWithLockFile" => Self::RestorePackagesWithLockFile(flag()?),
            "TargetFramework" => {
                Self::TargetFramework(value.trim().parse().map_err(|_| unsupported_value())?)
            }
            "Version" => Self::Version(text),
            "VersionPrefix" => Self::VersionPrefix(text),
            _ => Self::VersionSuffix(text),
        };
        Ok(setting)
    }

    /// The `<PropertyGroup>` child element this setting writes.
    pub fn element_name(&self) -> &'static str {
        match self {
            Self::AppendTargetFrameworkToOutputPath(_) => "AppendTargetFrameworkToOutputPath",
            Self::AssemblyName(_) => "AssemblyName",
            Self::GenerateDocumentationFile(_) => "GenerateDocumentationFile",
            Self::IntermediateOutputPath(_) => "IntermediateOutputPath",
            Self::LangVersion(_) => "LangVersion",
            Self::Nullable(_) => "Nullable",
            Self::OutputType(_) => "OutputType",
            Self::OutputPath(_) => "OutputPath",
            Self::RestorePackagesWithLockFile(_) => "RestorePackagesWithLockFile",
            Self::TargetFramework(_) => "TargetFramework",
            Self::Version(_) => "Version",
            Self::VersionPrefix(_) => "VersionPrefix",
            Self::VersionSuffix(_) => "VersionSuffix",
        }
    }

    /// The element text this setting writes.
    pub fn value_text(&self) -> String {
        match self {
            Self::AppendTargetFrameworkToOutputPath(b)
            | Self::GenerateDocumentationFile(b)
            | Self::RestorePackagesWithLockFile(b) => b.to_string(),
            Self::Nullable(true) => "enable".to_string(),
            Self::Nullable(false) => "disable".to_string(),
            Self::OutputType(t) => t.to_string(),
            Self::TargetFramework(f) => f.to_string(),
            Self::AssemblyName(s)
            | Self::IntermediateOutputPath(s)
            | Self::LangVersion(s)
            | Self::OutputPath(s)
            | Self::Version(s)
            | Self::VersionPrefix(s)
            | Self::VersionSuffix(s) => s.clone(),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Splits `Name:Value` at the first colon, so values may contain colons (`C:\out`).
pub fn split_request(pair: &str) -> Result<(&str, &str)> {
    let (name, value) = pair
        .split_once(':')
        .ok_or_else(|| DnprojError::MissingArgument(format!("property '{}' (expected Name:Value)", pair)))?;
    if name.trim().is_empty() || value.trim().is_empty() {
        return Err(
            DnprojError::MissingArgument(format!("property '{}' (expected Name:Value)", pair)).into(),
        );
    }
    Ok((name.trim(), value))
}

/// Parses every request, warning about and skipping unsupported ones.
///
/// A later request for a property replaces an earlier one in place.
pub fn parse_requests<S: AsRef<str>>(pairs: &[S]) -> Result<Vec<PropertySetting>> {
    let mut settings: Vec<PropertySetting> = Vec::new();
    for pair in pairs {
        let (name, value) = split_request(pair.as_ref())?;
        match PropertySetting::parse(name, value) {
            Ok(setting) => {
                debug!("Property request {} -> {:?}", pair.as_ref(), setting);
                match settings
                    .iter_mut()
                    .find(|s| s.element_name() == setting.element_name())
                {
                    Some(existing) => *existing = setting,
                    None => settings.push(setting),
                }
            }
            Err(e) => warn!("Skipping '{}': {}", pair.as_ref(), e),
        }
    }
    Ok(settings)
}
