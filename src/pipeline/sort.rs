use tracing::debug;

use crate::date::StatementDate;
use crate::errors::{StatementError, StatementResult};
use crate::types::{SplitRecord, Table, Transaction};

/// Stable ascending sort by date; equal dates keep their relative order.
pub fn sort_by_date(mut table: Table<Transaction>) -> Table<Transaction> {
    table.rows.sort_by_key(|txn| txn.date);
    table
}

/// Parses every `Date` cell and sorts the rows by it. A single unparseable
/// date fails the whole table.
pub fn sort_transactions(table: Table<SplitRecord>) -> StatementResult<Table<Transaction>> {
    let Table {
        bank,
        extra_columns,
        rows,
    } = table;

    let rows = rows
        .into_iter()
        .map(|record| {
            let date = StatementDate::from(record.date);
            let parsed = date.parse().ok_or_else(|| StatementError::DateParseFailure {
                value: date.as_str().to_string(),
                row: record.row,
            })?;

            Ok(Transaction {
                date: parsed,
                description: record.description,
                credit: record.credit,
                debit: record.debit,
                extra: record.extra,
            })
        })
        .collect::<StatementResult<Vec<_>>>()?;

    let table = sort_by_date(Table::new(bank, extra_columns, rows));
    debug!(
        rows = table.len(),
        first = ?table.rows.first().map(|t| t.date),
        last = ?table.rows.last().map(|t| t.date),
        "sorted transactions"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::Bank;
    use rust_decimal::Decimal;

    fn table(dates: &[&str]) -> Table<SplitRecord> {
        let rows = dates
            .iter()
            .enumerate()
            .map(|(i, date)| SplitRecord {
                row: i + 1,
                date: date.to_string(),
                description: format!("row {}", i + 1),
                credit: Some(Decimal::ONE),
                debit: None,
                extra: Vec::new(),
            })
            .collect();
        Table::new(Bank::Chase, Vec::new(), rows)
    }

    fn rendered_dates(table: &Table<Transaction>) -> Vec<String> {
        table.rows.iter().map(|t| t.to_record()[0].clone()).collect()
    }

    #[test]
    fn test_sort_ascending() {
        let sorted = sort_transactions(table(&["03/01/2024", "01/15/2024"])).unwrap();
        assert_eq!(rendered_dates(&sorted), vec!["01/15/2024", "03/01/2024"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let sorted =
            sort_transactions(table(&["01/02/2024", "01/01/2024", "01/02/2024", "01/01/2024"]))
                .unwrap();

        let order: Vec<&str> = sorted.rows.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(order, vec!["row 2", "row 4", "row 1", "row 3"]);
    }

    #[test]
    fn test_sort_reformats_dates() {
        let sorted = sort_transactions(table(&["2024-02-03", "1/5/24"])).unwrap();
        assert_eq!(rendered_dates(&sorted), vec!["01/05/2024", "02/03/2024"]);
    }

    #[test]
    fn test_sort_dashed_two_digit_year() {
        let sorted = sort_transactions(table(&["01-05-24", "01/01/2024"])).unwrap();
        assert_eq!(rendered_dates(&sorted), vec!["01/01/2024", "01/05/2024"]);
    }

    #[test]
    fn test_sort_rejects_short_year_in_iso_date() {
        let result = sort_transactions(table(&["24-01-05"]));
        assert!(matches!(result, Err(StatementError::DateParseFailure { row: 1, .. })));
    }

    #[test]
    fn test_sort_is_idempotent() {
        let sorted = sort_transactions(table(&["12/31/2023", "01/02/2024", "06/30/2023", "01/02/2024"]))
            .unwrap();

        assert_eq!(sort_by_date(sorted.clone()), sorted);
    }

    #[test]
    fn test_sort_invalid_date_is_fatal() {
        let result = sort_transactions(table(&["01/05/2024", "not a date"]));

        match result {
            Err(StatementError::DateParseFailure { value, row }) => {
                assert_eq!(value, "not a date");
                assert_eq!(row, 2);
            }
            other => panic!("expected DateParseFailure, got {:?}", other),
        }
    }
}
