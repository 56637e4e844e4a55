use rust_decimal::Decimal;
use tracing::debug;

use crate::types::{SplitRecord, Table};

fn non_zero(value: Option<Decimal>) -> Option<Decimal> {
    value.filter(|v| !v.is_zero())
}

/// Nulls out zero credits/debits, then drops rows left with neither.
pub fn clean_empty_values(table: Table<SplitRecord>) -> Table<SplitRecord> {
    let before = table.len();
    let Table {
        bank,
        extra_columns,
        rows,
    } = table;

    let rows: Vec<SplitRecord> = rows
        .into_iter()
        .map(|record| SplitRecord {
            credit: non_zero(record.credit),
            debit: non_zero(record.debit),
            ..record
        })
        .filter(SplitRecord::has_value)
        .collect();

    debug!(dropped = before - rows.len(), rows = rows.len(), "cleaned empty values");
    Table::new(bank, extra_columns, rows)
}
