//! # dnproj Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file is the entry point for the dnproj CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration and routing to the command handlers
//!
//! ## Architecture
//!
//! - Each top-level command group (`solution`, `project`) is a variant of
//!   the `Commands` enum, mapped to a handler in `commands::`.
//! - `dotnet` invocations go through the command objects in `dotnet::command`.
//! - `.csproj` edits go through `dotnet::project_config`.
//! - All errors propagate to this level for consistent handling.
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! dnproj --help
//!
//! # Show what would run, with increased verbosity
//! dnproj -vv --dry-run project new classlib -o src/MyProduct.Core
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Load configuration and dispatch to the command handler
//! 4. Print any error and exit with status 1
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command groups and their handlers
mod common; // Shared utilities (filesystem, process execution)
mod core; // Errors and configuration
mod dotnet; // dotnet command objects and project file editing

#[derive(Parser, Debug)]
#[command(
    name = "dnproj",
    about = "dnproj: dotnet solution/project automation and .csproj editing",
    long_about = "Create solutions and projects, add references, packages and classes through\n\
                  the dotnet CLI, and make idempotent edits to .csproj files.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Print the dotnet commands that would run without running them.
    #[arg(long, global = true)]
    dry_run: bool,
}

#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "s")]
    Solution(commands::solution::SolutionArgs),
    #[command(alias = "p")]
    Project(commands::project::ProjectArgs),
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = commands::AppContext::load(cli.dry_run)?;
    match cli.command {
        Commands::Solution(args) => commands::solution::handle_solution(args, &ctx).await,
        Commands::Project(args) => commands::project::handle_project(args, &ctx).await,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["dnproj", "solution", "new", "--dry-run", "-vv"]).unwrap();
        assert!(cli.dry_run);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_command_aliases() {
        let cli = Cli::try_parse_from(["dnproj", "p", "class", "Core", "Order"]).unwrap();
        assert!(matches!(cli.command, Commands::Project(_)));
        let cli = Cli::try_parse_from(["dnproj", "s", "add", "A.sln", "B"]).unwrap();
        assert!(matches!(cli.command, Commands::Solution(_)));
    }

    #[test]
    fn test_missing_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["dnproj"]).is_err());
    }
}
