//! Reconcile use case
//!
//! Builds a knowledge base from the master table, then fills blank
//! Sector/Category cells in the target table by organisation name.

use super::{persist, FileReport, TransformOutcome};
use crate::domain::table::ORGANISATION;
use crate::domain::{reconcile_table, KnowledgeBase};
use crate::error::Result;
use crate::infrastructure::{
    derived_output_path, parse_table, parse_table_with, read_input, write_table, CsvFormat,
    ExtraFields,
};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ReconcileOptions {
    pub master: PathBuf,
    pub target: PathBuf,
    /// Destination (None = `<targetStem>_enriched<ext>` next to the target)
    pub output: Option<PathBuf>,
    pub format: CsvFormat,
    pub dry_run: bool,
}

/// Enrich `target` text from `master` text.
///
/// Never fails: an unreadable master or target, or a target without data
/// rows, produces the empty outcome.
pub fn enrich_from_master(master: &str, target: &str, format: CsvFormat) -> TransformOutcome {
    match try_enrich_from_master(master, target, format) {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(error = %e, "enrichment failed, returning empty result");
            TransformOutcome::empty()
        }
    }
}

/// Build the knowledge base from master text.
///
/// Master cells are only read by column name, so fields past the header
/// width (e.g. a trailing delimiter) are dropped rather than rejected.
pub fn build_knowledge_base(master: &str, format: CsvFormat) -> Result<KnowledgeBase> {
    let kb = match parse_table_with(master, format, ExtraFields::Ignore)? {
        Some(table) => KnowledgeBase::from_table(&table),
        None => {
            tracing::warn!("master has no header row, knowledge base is empty");
            KnowledgeBase::new()
        }
    };

    tracing::info!(organisations = kb.len(), "knowledge base built");
    Ok(kb)
}

fn try_enrich_from_master(
    master: &str,
    target: &str,
    format: CsvFormat,
) -> Result<TransformOutcome> {
    let kb = build_knowledge_base(master, format)?;

    let Some(mut table) = parse_table(target, format)? else {
        tracing::warn!("target has no header row");
        return Ok(TransformOutcome::empty());
    };
    if table.is_empty() {
        tracing::warn!("target has no data rows");
        return Ok(TransformOutcome::empty());
    }
    if table.column(ORGANISATION).is_none() {
        tracing::warn!("target has no Organisation column, rows will pass through unchanged");
    }

    let updated = reconcile_table(&mut table, &kb);
    let output = write_table(&table, format)?;
    tracing::info!(updated, total = table.len(), "enrichment complete");

    Ok(TransformOutcome {
        output,
        updated,
        total: table.len(),
    })
}

/// Enrich the target file and write `<stem>_enriched<ext>` (or the configured output)
pub fn reconcile_file(options: &ReconcileOptions) -> Result<FileReport> {
    let master = read_input(&options.master)?;
    let target = read_input(&options.target)?;
    let outcome = enrich_from_master(&master, &target, options.format);

    let output_path = options
        .output
        .clone()
        .unwrap_or_else(|| derived_output_path(&options.target, "_enriched"));

    persist(outcome, output_path, options.dry_run)
}
