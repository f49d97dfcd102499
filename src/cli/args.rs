// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cmt - Smart conventional commit messages
///
/// Predicts a conventional commit message from the changes in your
/// repository and prints the git invocation to use it.
#[derive(Parser, Debug)]
#[command(name = "cmt")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Smart conventional commit message prediction", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to smart if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Disable all interactive prompts
    #[arg(long, global = true)]
    pub non_interactive: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output format for scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Predict a commit message from staged changes (default command)
    Smart,

    /// Compose a commit message from parts
    Compose(ComposeArgs),

    /// Validate a commit message
    Check(CheckArgs),

    /// List the supported commit types
    Types,

    /// Suggest common scopes
    Scopes(ScopesArgs),

    /// Print version information
    Version,
}

/// Arguments for the compose command.
#[derive(Parser, Debug, Default, Clone)]
pub struct ComposeArgs {
    /// Pre-fill the commit type
    #[arg(short = 't', long)]
    pub r#type: Option<String>,

    /// Pre-fill the scope
    #[arg(short, long)]
    pub scope: Option<String>,

    /// Pre-fill the description
    #[arg(short = 'm', long)]
    pub message: Option<String>,

    /// Mark as breaking change
    #[arg(long)]
    pub breaking: bool,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Default, Clone)]
pub struct CheckArgs {
    /// The commit message to validate
    pub message: String,
}

/// Arguments for the scopes command.
#[derive(Parser, Debug, Default, Clone)]
pub struct ScopesArgs {
    /// Filter scopes containing this text
    pub filter: Option<String>,
}

impl Cli {
    /// Get the effective command, defaulting to Smart if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Smart)
    }
}
