use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::bank::{Bank, CREDIT, DATE, DEBIT, DESCRIPTION};
use crate::date::format_date;

/// Canonical table: the detected bank, the extra columns kept after
/// normalization (in input order) and one row type per pipeline stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table<R> {
    pub bank: Bank,
    pub extra_columns: Vec<String>,
    pub rows: Vec<R>,
}

impl<R> Table<R> {
    pub fn new(bank: Bank, extra_columns: Vec<String>, rows: Vec<R>) -> Self {
        Self {
            bank,
            extra_columns,
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `Date, Description, Credit, Debit`, then the retained extra columns.
    pub fn headers(&self) -> Vec<String> {
        [DATE, DESCRIPTION, CREDIT, DEBIT]
            .into_iter()
            .map(String::from)
            .chain(self.extra_columns.iter().cloned())
            .collect()
    }

    pub fn with_rows<T>(self, rows: Vec<T>) -> Table<T> {
        Table {
            bank: self.bank,
            extra_columns: self.extra_columns,
            rows,
        }
    }
}

/// Row after column normalization; `amount` is still the raw cell text.
/// `row` is the 1-based data row in the input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub row: usize,
    pub date: String,
    pub description: String,
    pub amount: String,
    pub extra: Vec<String>,
}

/// Row after the signed amount was split into credit and debit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitRecord {
    pub row: usize,
    pub date: String,
    pub description: String,
    pub credit: Option<Decimal>,
    pub debit: Option<Decimal>,
    pub extra: Vec<String>,
}

impl SplitRecord {
    pub fn has_value(&self) -> bool {
        self.credit.is_some() || self.debit.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    pub credit: Option<Decimal>,
    pub debit: Option<Decimal>,
    pub extra: Vec<String>,
}

impl Transaction {
    /// Cells in `Table::headers` order; nulls become empty cells.
    pub fn to_record(&self) -> Vec<String> {
        let amount = |value: Option<Decimal>| value.map(|v| v.to_string()).unwrap_or_default();

        [
            format_date(self.date),
            self.description.clone(),
            amount(self.credit),
            amount(self.debit),
        ]
        .into_iter()
        .chain(self.extra.iter().cloned())
        .collect()
    }
}
