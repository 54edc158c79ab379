//! CLI surface
//!
//! One subcommand, `out`, mirroring the operator workflow: read the
//! script, execute it, package the evidence. A missing script file is
//! the one recoverable condition; it falls back to the embedded default
//! script with a warning instead of failing the run.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::archive::{self, Manifest};
use crate::defaults;
use crate::executor::{Engine, RunReport};
use crate::parser;

#[derive(Parser)]
#[command(name = "flare")]
#[command(about = "Scripted diagnostics collection", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Outputs an archive from collected data
    Out {
        /// Path to the flare script file
        #[arg(long, default_value = "flare.file")]
        file: String,

        /// Path of the generated archive
        #[arg(long, default_value = "out.tar.gz")]
        output: String,
    },
}

/// Run the CLI by parsing process arguments
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Out { file, output } => run_out(&file, &output),
    }
}

/// Execute a script file and write the archive
pub fn run_out(file: &str, output: &str) -> Result<()> {
    let source = match fs::read_to_string(file) {
        Ok(source) => source,
        Err(_) => {
            warn!(file, "unable to find script file, using sensible defaults");
            defaults::default_script()
        }
    };

    let script = parser::parse_script(&source)
        .with_context(|| format!("Failed to parse script {}", file))?;

    let RunReport { evidence, executed } = Engine::new()
        .execute(&script)
        .context("Script execution failed")?;

    let manifest = Manifest::new(executed);
    archive::write_archive(Path::new(output), &evidence, &manifest)?;

    info!(output, files = evidence.files.len(), "wrote archive");
    Ok(())
}
