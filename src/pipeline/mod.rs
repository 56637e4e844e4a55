//! Pure transformation stages. Each one takes a table by value and returns the
//! next one; none of them touch the file system.

mod clean;
mod normalize;
mod sort;
mod split;

pub use clean::clean_empty_values;
pub use normalize::normalize_columns;
pub use sort::{sort_by_date, sort_transactions};
pub use split::split_amount;

use tracing::info;

use crate::bank::Bank;
use crate::errors::{Stage, StatementError, StatementResult};
use crate::table::RawTable;
use crate::types::{Table, Transaction};

fn ensure_rows<R>(table: Table<R>, stage: Stage) -> StatementResult<Table<R>> {
    if table.is_empty() {
        return Err(StatementError::EmptyResult { stage });
    }
    Ok(table)
}

/// Identify → normalize → split → clean → sort.
pub fn normalize_table(raw: RawTable) -> StatementResult<Table<Transaction>> {
    let bank = Bank::identify(&raw.headers);
    info!(%bank, rows = raw.rows.len(), "identified statement");

    let table = normalize_columns(raw, bank)?;
    let table = ensure_rows(split_amount(table)?, Stage::Split)?;
    let table = ensure_rows(clean_empty_values(table), Stage::Clean)?;
    ensure_rows(sort_transactions(table)?, Stage::Sort)
}
