//! Evidence outbox
//!
//! Collection actions do not write the archive themselves; they append
//! files here and the caller packages the outbox once the whole run has
//! succeeded. A failed run therefore never emits a partial archive.

use serde::{Deserialize, Serialize};

/// One collected file, named for its place inside the archive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceFile {
    pub name: String,
    pub contents: Vec<u8>,
}

/// Accumulated evidence for one run
#[derive(Debug, Clone, Default)]
pub struct Evidence {
    pub files: Vec<EvidenceFile>,
}

impl Evidence {
    pub fn new() -> Self {
        Evidence { files: Vec::new() }
    }

    pub fn push_file(&mut self, name: impl Into<String>, contents: Vec<u8>) {
        self.files.push(EvidenceFile {
            name: name.into(),
            contents,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
