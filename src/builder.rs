use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, info_span};

use crate::{
    bank::Bank,
    config::Settings,
    errors::{StatementError, StatementResult},
    naming,
    pipeline::normalize_table,
    table::{RawTable, write_path},
    types::{Table, Transaction},
};

/// Result of one successfully processed statement file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedStatement {
    pub bank: Bank,
    pub output_path: PathBuf,
    pub table: Table<Transaction>,
}

#[derive(Debug, Default)]
pub struct StatementProcessor {
    input: Option<PathBuf>,
    output_file: Option<PathBuf>,
    settings: Settings,
}

impl StatementProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(mut self, path: impl AsRef<Path>) -> Self {
        self.input = Some(path.as_ref().to_path_buf());
        self
    }

    /// Explicit output path; skips the generated name.
    pub fn output_file(mut self, path: impl AsRef<Path>) -> Self {
        self.output_file = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.settings.output_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn account_type(mut self, account_type: &str) -> Self {
        self.settings.account_type = account_type.to_string();
        self
    }

    pub fn settings(mut self, settings: &Settings) -> Self {
        self.settings = settings.clone();
        self
    }

    pub fn process(self) -> StatementResult<ProcessedStatement> {
        let input = self.input.ok_or(StatementError::MissingInput)?;
        self.settings.validate()?;

        let _span = info_span!("statement", file = %input.display()).entered();

        let raw = RawTable::from_path(&input)?;
        let table = normalize_table(raw)?;

        let output_path = match self.output_file {
            Some(path) => path,
            None => naming::output_path(
                &input,
                table.bank,
                &self.settings.account_type,
                self.settings.output_dir(),
            )?,
        };

        write_path(&table, &output_path)?;
        info!(path = %output_path.display(), rows = table.len(), "File saved");

        Ok(ProcessedStatement {
            bank: table.bank,
            output_path,
            table,
        })
    }
}
