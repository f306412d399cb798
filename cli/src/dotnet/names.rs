//! # Supported dotnet Constants
//!
//! File: cli/src/dotnet/names.rs
//!
//! ## Overview
//!
//! Closed sets of string values understood by dnproj: target framework
//! monikers, `dotnet new` template names, assembly output types,
//! `SuppressMessageAttribute` scopes and solution file formats.
//!
//! Each set is an enum with:
//! - `ALL`: every supported value, in declaration order
//! - `as_str()` / `Display`: the exact text written to command lines and XML
//! - `FromStr`: case-sensitive parse that fails with
//!   `DnprojError::UnsupportedValue`
//!
//! `FromStr` also makes the enums usable directly as `clap` argument types.
//!
use crate::core::error::DnprojError;
use std::fmt;
use std::str::FromStr;

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DnprojError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.as_str() == s)
                    .ok_or_else(|| DnprojError::UnsupportedValue {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

string_enum! {
    /// A target framework moniker accepted by `dotnet new -f` and `<TargetFramework>`.
    FrameworkName, "framework" {
        Net10 => "net10.0",
        Net9 => "net9.0",
        Net8 => "net8.0",
        NetStandard20 => "netstandard2.0",
        NetStandard21 => "netstandard2.1",
    }
}

string_enum! {
    /// A `dotnet new` project template.
    ProjectTemplate, "project template" {
        XUnit => "xunit",
        XUnit3 => "xunit3",
        Console => "console",
        ClassLib => "classlib",
        Blazor => "blazor",
        Worker => "worker",
        WebApi => "webapi",
        WinForms => "winforms",
    }
}

string_enum! {
    /// Value of the `<OutputType>` property.
    AssemblyOutputType, "output type" {
        Exe => "exe",
        Library => "library",
        WinExe => "winexe",
        Module => "module",
    }
}

string_enum! {
    /// `Scope` named argument of `SuppressMessageAttribute`.
    SuppressMessageScope, "suppress message scope" {
        NamespaceAndDescendants => "namespaceanddescendants",
        Namespace => "namespace",
        Member => "member",
        Module => "module",
        Type => "type",
    }
}

string_enum! {
    /// Solution file flavour passed to `dotnet new sln -f`.
    SolutionFormat, "solution format" {
        Sln => "sln",
        Slnx => "slnx",
    }
}

impl ProjectTemplate {
    /// The placeholder source file `dotnet new` generates for this template, if any.
    pub fn scaffold_file(&self) -> Option<&'static str> {
        match self {
            ProjectTemplate::ClassLib => Some("Class1.cs"),
            ProjectTemplate::XUnit | ProjectTemplate::XUnit3 => Some("UnitTest1.cs"),
            _ => None,
        }
    }
}

impl SolutionFormat {
    /// File extension including the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            SolutionFormat::Sln => ".sln",
            SolutionFormat::Slnx => ".slnx",
        }
    }
}
