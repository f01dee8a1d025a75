//! glabs CLI
//!
//! Inspects the assignment configuration glabs would provision from.

mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => {
            let config = cli.config.ok_or_else(|| {
                CliError::user("no configuration file given; pass --config or set GLABS_CONFIG")
            })?;
            execute_command(cmd, &config)
        }
        None => {
            println!("{} assignment configuration", "glabs".green().bold());
            println!();
            println!("Run {} for available commands.", "glabs --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, config: &std::path::Path) -> Result<()> {
    match cmd {
        Commands::Show {
            course,
            assignment,
            only,
            json,
        } => commands::run_show(config, &course, &assignment, &only, json),
    }
}
