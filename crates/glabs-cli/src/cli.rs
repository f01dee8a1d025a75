//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// glabs - Inspect classroom assignment configuration
#[derive(Parser, Debug)]
#[command(name = "glabs")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (TOML, YAML or JSON, detected by extension)
    #[arg(short, long, global = true, env = "GLABS_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the resolved configuration of an assignment
    ///
    /// Examples:
    ///   glabs show cs1 blatt1              # Everyone in the course
    ///   glabs show cs1 blatt1 alice bob    # Only these students (or groups)
    ///   glabs show cs1 blatt1 --json       # Machine-readable output
    Show {
        /// Course name
        course: String,

        /// Assignment name
        assignment: String,

        /// Restrict to these students or groups
        only: Vec<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
