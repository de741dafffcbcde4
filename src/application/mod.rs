//! Application layer - Pipelines and file-level use cases

pub mod classify;
pub mod reconcile;

pub use classify::{classify_file, clean_from_tags, ClassifyOptions};
pub use reconcile::{enrich_from_master, reconcile_file, ReconcileOptions};

use crate::error::Result;
use crate::infrastructure::write_output_atomic;
use std::path::PathBuf;

/// Serialized table plus row counters
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransformOutcome {
    pub output: String,
    pub updated: usize,
    pub total: usize,
}

impl TransformOutcome {
    /// The result for input without a header or without data rows
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }
}

/// What a file-level run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub output_path: PathBuf,
    pub updated: usize,
    pub total: usize,
    /// False for dry runs and for empty results
    pub written: bool,
    pub dry_run: bool,
}

/// Write the outcome unless it is empty or this is a dry run
fn persist(outcome: TransformOutcome, output_path: PathBuf, dry_run: bool) -> Result<FileReport> {
    let write = !dry_run && !outcome.is_empty();
    if write {
        write_output_atomic(&output_path, &outcome.output)?;
        tracing::info!(path = %output_path.display(), "output written");
    }

    Ok(FileReport {
        output_path,
        updated: outcome.updated,
        total: outcome.total,
        written: write,
        dry_run,
    })
}
