//! Reading input files and writing results next to them

use crate::error::{Result, TidyError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Read a file as text.
///
/// Input that is not valid UTF-8 is decoded as Windows-1252, the usual
/// encoding of spreadsheet exports. A missing file maps to `FileNotFound`.
pub fn read_input(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            TidyError::FileNotFound(path.to_path_buf())
        } else {
            TidyError::Io(e)
        }
    })?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            tracing::warn!(path = %path.display(), "input is not UTF-8, decoding as Windows-1252");
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(e.as_bytes());
            Ok(decoded.into_owned())
        }
    }
}

/// `<dir>/<stem><suffix><ext>` for a given input path.
///
/// `contacts.csv` with suffix `_cleaned` becomes `contacts_cleaned.csv`.
pub fn derived_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match input.extension() {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}{}", stem, suffix),
    };

    input.with_file_name(file_name)
}

/// Write content by writing a temp file in the same directory, then renaming
/// it over the destination. The temp file is removed if the rename fails.
pub fn write_output_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_name = format!(
        "{}.crmtidy-tmp-{}",
        path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("output.csv"),
        std::process::id()
    );
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, content)?;

    if let Err(e) = replace_file(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(TidyError::Io(e));
    }
    Ok(())
}

#[cfg(not(windows))]
fn replace_file(from: &Path, to: &Path) -> std::io::Result<()> {
    fs::rename(from, to)
}

// `rename` does not overwrite an existing file on Windows
#[cfg(windows)]
fn replace_file(from: &Path, to: &Path) -> std::io::Result<()> {
    if to.is_file() {
        fs::remove_file(to)?;
    }
    fs::rename(from, to)
}
