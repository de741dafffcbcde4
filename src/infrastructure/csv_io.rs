//! Delimited-text reading and writing

use crate::domain::Table;
use crate::error::{Result, TidyError};
use std::io;

const BOM: char = '\u{feff}';

/// Field delimiter shared by input and output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvFormat {
    pub delimiter: u8,
}

impl CsvFormat {
    pub fn with_delimiter(delimiter: u8) -> Self {
        CsvFormat { delimiter }
    }

    /// Parse a delimiter argument such as `,` `;` `|` or `\t`
    pub fn parse_delimiter(input: &str) -> Result<u8> {
        match input {
            "\\t" | "tab" => Ok(b'\t'),
            s if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
            _ => Err(TidyError::Config(format!("Invalid delimiter: {}", input))),
        }
    }
}

impl Default for CsvFormat {
    fn default() -> Self {
        CsvFormat { delimiter: b',' }
    }
}

/// Remove a leading byte-order mark, if any
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BOM).unwrap_or(text)
}

/// What to do with rows that have more fields than the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtraFields {
    /// Fail with `MalformedRow`
    #[default]
    Reject,
    /// Drop the fields past the header width
    Ignore,
}

/// Parse text with a header row into a table.
///
/// Returns `Ok(None)` when there is no header at all. Rows with more fields
/// than the header are rejected.
pub fn parse_table(text: &str, format: CsvFormat) -> Result<Option<Table>> {
    parse_table_with(text, format, ExtraFields::Reject)
}

/// Like [`parse_table`], with a choice of how to treat overlong rows
pub fn parse_table_with(
    text: &str,
    format: CsvFormat,
    extra: ExtraFields,
) -> Result<Option<Table>> {
    let text = strip_bom(text);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(format.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() {
        return Ok(None);
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() > headers.len() {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            if extra == ExtraFields::Reject {
                return Err(TidyError::MalformedRow {
                    line,
                    expected: headers.len(),
                    found: record.len(),
                });
            }
            tracing::debug!(line, found = record.len(), "dropping fields past header width");
        }
        rows.push(
            record
                .iter()
                .take(headers.len())
                .map(str::to_string)
                .collect(),
        );
    }

    Ok(Some(Table::new(headers, rows)))
}

/// Serialize a table, header first
pub fn write_table(table: &Table, format: CsvFormat) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(format.delimiter)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(table.headers())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| TidyError::Io(io::Error::new(io::ErrorKind::Other, e.to_string())))?;

    String::from_utf8(bytes)
        .map_err(|e| TidyError::Config(format!("Output is not valid UTF-8: {}", e)))
}
