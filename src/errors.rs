use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pipeline stage that can end up with no rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Split,
    Clean,
    Sort,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Split => "splitting amounts",
            Stage::Clean => "cleaning empty values",
            Stage::Sort => "sorting transactions",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while normalizing a bank statement
#[derive(Error, Debug)]
pub enum StatementError {
    /// The processor was called without an input file
    #[error("Input file is required")]
    MissingInput,

    /// Input file does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Column set does not match any known bank
    #[error("Unknown bank format for columns: {}", .headers.join(", "))]
    UnknownBankFormat { headers: Vec<String> },

    /// Canonical column missing after renaming
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A pipeline stage left no transactions
    #[error("No transactions left after {stage}")]
    EmptyResult { stage: Stage },

    /// Date in an unrecognized format
    #[error("Invalid date '{value}' in row {row}")]
    DateParseFailure { value: String, row: usize },

    /// Amount cell is not numeric
    #[error("Invalid amount '{value}' in row {row}")]
    AmountParseFailure { value: String, row: usize },

    /// Invalid setting (e.g. empty account type)
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    /// CSV reader or writer error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Failure reading or writing files on disk
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for Result with the crate error type
pub type StatementResult<T> = Result<T, StatementError>;
