//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::generate;
use super::output::{Output, OutputFormat};
use crate::domain::SystemClock;

#[derive(Parser)]
#[command(name = "codex")]
#[command(author, version, about = "Regenerate the codex section of a notes vault README")]
pub struct Cli {
    /// Vault root (defaults to the nearest parent containing codex.config.json)
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', env = "CODEX_VERBOSE")]
    pub verbose: bool,

    /// Print the merged README instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose(&format!(
        "Codex starting: root={:?}, dry_run={}",
        cli.root, cli.dry_run
    ));

    let summary = generate::run(&output, cli.root.as_deref(), cli.dry_run, &SystemClock)?;

    output.data(&summary);
    if summary.written {
        output.status("Codex updated in README.md");
    }

    output.verbose("Command completed successfully");
    Ok(())
}
