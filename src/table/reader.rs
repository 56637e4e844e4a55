use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::ReaderBuilder;

use crate::errors::{StatementError, StatementResult};

const BOM: char = '\u{feff}';

/// Header row plus text cells, exactly as exported by the bank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn from_reader<R: Read>(reader: R) -> StatementResult<Self> {
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(i, h)| match i {
                0 => h.trim_start_matches(BOM).to_string(),
                _ => h.to_string(),
            })
            .collect();

        let mut rows: Vec<Vec<String>> = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    pub fn from_path(path: &Path) -> StatementResult<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StatementError::FileNotFound(path.to_path_buf()),
            _ => e.into(),
        })?;
        Self::from_reader(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_CSV: &str = "Posted Date,Reference Number,Payee,Address,Amount
01/15/2024,24692164,\"ACME, INC\",SEATTLE WA,-12.34
01/16/2024,24692165,PAYMENT - THANK YOU,,500.00
";

    #[test]
    fn test_from_reader() {
        let table = RawTable::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(table.headers.len(), 5);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][2], "ACME, INC");
        assert_eq!(table.rows[1][3], "");
        assert_eq!(table.headers[4], "Amount");
    }

    #[test]
    fn test_from_reader_strips_bom() {
        let content = format!("{BOM}{SAMPLE_CSV}");
        let table = RawTable::from_reader(content.as_bytes()).unwrap();
        assert_eq!(table.headers[0], "Posted Date");
    }

    #[test]
    fn test_from_reader_header_only() {
        let table = RawTable::from_reader("Foo,Bar\n".as_bytes()).unwrap();
        assert_eq!(table.headers, vec!["Foo", "Bar"]);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_from_reader_ragged_row_fails() {
        let result = RawTable::from_reader("Foo,Bar\n1,2,3\n".as_bytes());
        assert!(matches!(result, Err(StatementError::Csv(_))));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();

        let table = RawTable::from_path(file.path()).unwrap();
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.csv");

        let result = RawTable::from_path(&missing);
        match result {
            Err(StatementError::FileNotFound(path)) => assert_eq!(path, missing),
            other => panic!("expected FileNotFound, got {:?}", other),
        }
    }
}
