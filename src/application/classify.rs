//! Classify use case

use super::{persist, FileReport, TransformOutcome};
use crate::domain::table::TAGS;
use crate::domain::{RuleBook, TagClassifier};
use crate::error::Result;
use crate::infrastructure::{derived_output_path, parse_table, read_input, write_table, CsvFormat};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ClassifyOptions {
    pub input: PathBuf,
    /// Destination (None = `<stem>_cleaned<ext>` next to the input)
    pub output: Option<PathBuf>,
    pub format: CsvFormat,
    pub dry_run: bool,
}

/// Classify Sector/Category in `input` text from its Tags column.
///
/// Never fails: input without a header or data rows, and any parse failure,
/// produce the empty outcome.
pub fn clean_from_tags(input: &str, rules: &RuleBook, format: CsvFormat) -> TransformOutcome {
    match try_clean_from_tags(input, rules, format) {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(error = %e, "classification failed, returning empty result");
            TransformOutcome::empty()
        }
    }
}

fn try_clean_from_tags(
    input: &str,
    rules: &RuleBook,
    format: CsvFormat,
) -> Result<TransformOutcome> {
    let Some(mut table) = parse_table(input, format)? else {
        tracing::warn!("input has no header row");
        return Ok(TransformOutcome::empty());
    };
    if table.is_empty() {
        tracing::warn!("input has no data rows");
        return Ok(TransformOutcome::empty());
    }
    if table.column(TAGS).is_none() {
        tracing::warn!("input has no Tags column, rows will pass through unchanged");
    }

    let updated = TagClassifier::new(rules).classify_table(&mut table);
    let output = write_table(&table, format)?;
    tracing::info!(updated, total = table.len(), "classification complete");

    Ok(TransformOutcome {
        output,
        updated,
        total: table.len(),
    })
}

/// Classify a file and write `<stem>_cleaned<ext>` (or the configured output)
pub fn classify_file(options: &ClassifyOptions, rules: &RuleBook) -> Result<FileReport> {
    let text = read_input(&options.input)?;
    let outcome = clean_from_tags(&text, rules, options.format);

    let output_path = options
        .output
        .clone()
        .unwrap_or_else(|| derived_output_path(&options.input, "_cleaned"));

    persist(outcome, output_path, options.dry_run)
}
