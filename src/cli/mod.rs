//! Command-line interface for leakscan
//!
//! Argument parsing with clap and dispatch to the command implementations.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

pub use output::Output;

/// Leakscan - scan source trees for leaked credentials and secrets
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable quiet output (minimal)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Scan a directory for secrets
    Scan(ScanArgs),
    /// List the effective pattern catalog
    Patterns {
        /// Catalog file replacing the built-in patterns
        #[arg(long, value_name = "FILE")]
        patterns_file: Option<PathBuf>,
    },
}

/// Arguments for the scan command
#[derive(Debug, clap::Args)]
pub struct ScanArgs {
    /// Directory to scan
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,

    /// Glob patterns selecting files to scan (default: everything)
    #[arg(short, long)]
    pub glob: Vec<String>,

    /// Additional ad-hoc regex patterns to scan for
    #[arg(short, long)]
    pub pattern: Vec<String>,

    /// Matched values to treat as pre-approved (reported as excluded)
    #[arg(short, long)]
    pub exception: Vec<String>,

    /// Pattern descriptions to disable for this run
    #[arg(long)]
    pub disabled: Vec<String>,

    /// Catalog file replacing the built-in patterns
    #[arg(long, value_name = "FILE")]
    pub patterns_file: Option<PathBuf>,

    /// Where to write the findings as JSON annotations
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Persist verification results across runs in this file
    #[arg(long, value_name = "FILE")]
    pub cache_file: Option<PathBuf>,

    /// Do not call external verifiers; verifiable patterns are reported as detected
    #[arg(long)]
    pub skip_verification: bool,

    /// Abort when a definition references an unregistered verifier
    #[arg(long)]
    pub fail_on_unknown_verifier: bool,
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<ExitCode> {
        let default_level = if self.verbose { "debug" } else { "info" };
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
            )
            .with_writer(std::io::stderr)
            .init();

        let output = Output::new(self.verbose, self.quiet);

        match self.command {
            Some(Commands::Scan(args)) => commands::scan::execute(args, &output).await,
            Some(Commands::Patterns { patterns_file }) => {
                commands::patterns::execute(patterns_file.as_deref(), &output)?;
                Ok(ExitCode::SUCCESS)
            }
            None => {
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}
