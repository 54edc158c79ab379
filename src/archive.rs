//! Archive writer
//!
//! Packages the evidence of a successful run into a gzip-compressed tar
//! archive. Every archive carries a `manifest.json` describing the run;
//! evidence files sit next to it under their evidence names.

use crate::executor::Evidence;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use uuid::Uuid;

/// Name of the run manifest inside every archive
pub const MANIFEST_NAME: &str = "manifest.json";

/// Run metadata written into every archive
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Unique id for this run
    pub run_id: String,
    /// When the archive was written (UTC)
    pub created_at: DateTime<Utc>,
    /// Directive names in execution order
    pub directives: Vec<String>,
}

impl Manifest {
    pub fn new(directives: Vec<String>) -> Self {
        Manifest {
            run_id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            directives,
        }
    }
}

/// Write the archive for a completed run
pub fn write_archive(output: &Path, evidence: &Evidence, manifest: &Manifest) -> Result<()> {
    let file = File::create(output)
        .with_context(|| format!("Failed to create archive {}", output.display()))?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(encoder);

    let manifest_bytes =
        serde_json::to_vec_pretty(manifest).context("Failed to serialize run manifest")?;
    append_entry(&mut builder, MANIFEST_NAME, &manifest_bytes)?;

    for entry in &evidence.files {
        append_entry(&mut builder, &entry.name, &entry.contents)?;
    }

    let encoder = builder
        .into_inner()
        .context("Failed to finish tar stream")?;
    encoder.finish().context("Failed to finish gzip stream")?;

    Ok(())
}

fn append_entry<W: Write>(
    builder: &mut tar::Builder<W>,
    name: &str,
    contents: &[u8],
) -> Result<()> {
    let mut header = tar::Header::new_gnu();
    header.set_size(contents.len() as u64);
    header.set_mode(0o644);
    header.set_mtime(Utc::now().timestamp() as u64);

    builder
        .append_data(&mut header, name, contents)
        .with_context(|| format!("Failed to append {} to archive", name))
}
