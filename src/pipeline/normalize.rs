use tracing::debug;

use crate::bank::{AMOUNT, Bank, DATE, DESCRIPTION};
use crate::errors::{StatementError, StatementResult};
use crate::table::RawTable;
use crate::types::{NormalizedRecord, Table};

/// Drops the bank's extraneous columns and renames the rest to the canonical
/// schema. Columns that are neither dropped nor canonical are carried along as
/// extras, in input order.
pub fn normalize_columns(raw: RawTable, bank: Bank) -> StatementResult<Table<NormalizedRecord>> {
    let profile = bank.profile().ok_or_else(|| StatementError::UnknownBankFormat {
        headers: raw.headers.clone(),
    })?;

    let kept: Vec<(usize, &str)> = raw
        .headers
        .iter()
        .enumerate()
        .filter(|(_, h)| !profile.is_dropped(h))
        .map(|(i, h)| (i, profile.rename(h)))
        .collect();

    let position = |name: &str| {
        kept.iter()
            .find(|(_, column)| *column == name)
            .map(|(i, _)| *i)
            .ok_or_else(|| StatementError::MissingColumn(name.to_string()))
    };
    let date = position(DATE)?;
    let description = position(DESCRIPTION)?;
    let amount = position(AMOUNT)?;

    let (extra_idx, extra_columns): (Vec<usize>, Vec<String>) = kept
        .iter()
        .filter(|(_, column)| ![DATE, DESCRIPTION, AMOUNT].contains(column))
        .map(|(i, column)| (*i, column.to_string()))
        .unzip();

    let rows: Vec<NormalizedRecord> = raw
        .rows
        .into_iter()
        .enumerate()
        .map(|(n, mut cells)| {
            let mut take = |i: usize| cells.get_mut(i).map(std::mem::take).unwrap_or_default();
            NormalizedRecord {
                row: n + 1,
                date: take(date),
                description: take(description),
                amount: take(amount),
                extra: extra_idx.iter().map(|&i| take(i)).collect(),
            }
        })
        .collect();

    debug!(%bank, rows = rows.len(), extra = ?extra_columns, "normalized columns");
    Ok(Table::new(bank, extra_columns, rows))
}
