use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::debug;

use crate::errors::{StatementError, StatementResult};
use crate::types::{NormalizedRecord, SplitRecord, Table};

fn parse_amount(value: &str, row: usize) -> StatementResult<Option<Decimal>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map(Some)
        .map_err(|_| StatementError::AmountParseFailure {
            value: value.to_string(),
            row,
        })
}

/// Replaces the signed `Amount` with `Credit` (positive values) and `Debit`
/// (magnitude of negative values). Zero and empty amounts leave both unset.
pub fn split_amount(table: Table<NormalizedRecord>) -> StatementResult<Table<SplitRecord>> {
    let Table {
        bank,
        extra_columns,
        rows,
    } = table;

    let rows = rows
        .into_iter()
        .map(|record| {
            let amount = parse_amount(&record.amount, record.row)?;
            let (credit, debit) = match amount {
                Some(a) if a > Decimal::ZERO => (Some(a), None),
                Some(a) if a < Decimal::ZERO => (None, Some(-a)),
                _ => (None, None),
            };

            Ok(SplitRecord {
                row: record.row,
                date: record.date,
                description: record.description,
                credit,
                debit,
                extra: record.extra,
            })
        })
        .collect::<StatementResult<Vec<_>>>()?;

    debug!(rows = rows.len(), "split amounts");
    Ok(Table::new(bank, extra_columns, rows))
}
