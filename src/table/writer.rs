use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};

use crate::errors::StatementResult;
use crate::types::{Table, Transaction};

pub fn write_table<W: Write>(table: &Table<Transaction>, writer: W) -> StatementResult<()> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .from_writer(writer);

    writer.write_record(table.headers())?;
    for txn in &table.rows {
        writer.write_record(txn.to_record())?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the table to `path`, creating the parent directory when needed.
/// An existing file is overwritten.
pub fn write_path(table: &Table<Transaction>, path: &Path) -> StatementResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    write_table(table, File::create(path)?)
}
