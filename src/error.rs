//! Error types for crmtidy

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for crmtidy
#[derive(Debug, Error)]
pub enum TidyError {
    #[error("Input file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Rules error: {0}")]
    Rules(String),

    #[error("Row {line} has {found} fields but the header has {expected}")]
    MalformedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl TidyError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TidyError::FileNotFound(_) => 2,
            TidyError::Rules(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TidyError::FileNotFound(path) => {
                format!(
                    "Input file not found: {}\n\n\
                    Suggestions:\n\
                    • Check the spelling of the path\n\
                    • Relative paths are resolved from the current directory\n\
                    • For reconcile, check both --master and --target",
                    path.display()
                )
            }
            TidyError::Rules(msg) => {
                format!(
                    "Rules error: {}\n\n\
                    Expected format:\n\
                    [[sector]]\n\
                    token = \"construction\"\n\
                    value = \"Manufacturing & Industrial\"\n\
                    priority = 2\n\n\
                    Both [[sector]] and [[category]] entries are required.",
                    msg
                )
            }
            TidyError::Config(msg) => {
                if msg.contains("delimiter") {
                    format!(
                        "{}\n\n\
                        The delimiter must be a single ASCII character.\n\
                        Example: crmtidy classify contacts.csv --delimiter ';'",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TidyError
pub type Result<T> = std::result::Result<T, TidyError>;
