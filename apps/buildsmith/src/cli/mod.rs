//! # Buildsmith CLI Module
//!
//! This module implements the CLI interface for Buildsmith.
//!
//! ## Available Commands
//!
//! - `skills` - List catalog entries, optionally filtered
//! - `optimize` - Submit target skills and print the build
//! - `shell` - Interactive search/select/submit session (default)

mod commands;
pub mod shell;

use buildsmith_core::BuildsmithError;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Buildsmith - armor build optimizer client
///
/// Pick the skills you want, and the optimizer finds the armor,
/// talisman and decorations that get you there.
#[derive(Parser, Debug)]
#[command(name = "buildsmith")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Optimizer base URL (overrides config file and BUILDSMITH_URL)
    #[arg(short = 'u', long, global = true)]
    pub url: Option<String>,

    /// Path to a TOML config file
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List selectable skills
    Skills {
        /// Only show entries whose "name level" label contains this text
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Find a build for the given target skills
    Optimize {
        /// Target skill as "Name=Level" (repeatable; the highest level per name wins)
        #[arg(short, long = "skill", required = true)]
        skills: Vec<String>,
    },

    /// Start an interactive session
    Shell,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), BuildsmithError> {
    let client = connect(cli.config.as_deref(), cli.url.as_deref())?;
    let json_mode = cli.json_mode;

    let mut stdout = std::io::stdout();

    match cli.command {
        Some(Commands::Skills { filter }) => {
            cmd_skills(&client, json_mode, filter.as_deref(), &mut stdout).await
        }
        Some(Commands::Optimize { skills }) => {
            cmd_optimize(&client, json_mode, &skills, &mut stdout).await
        }
        Some(Commands::Shell) | None => cmd_shell(&client).await,
    }
}

/// Report the outcome of a command and return the process exit code.
///
/// Failures are logged and also written to `stderr` as `Error: <message>`,
/// so they stay visible whatever the log filter.
pub fn report_outcome<W: Write>(outcome: &Result<(), BuildsmithError>, stderr: &mut W) -> i32 {
    match outcome {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            // Nothing left to report to if stderr itself is gone.
            let _ = writeln!(stderr, "Error: {e}");
            1
        }
    }
}
