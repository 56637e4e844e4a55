use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Format of the `Date` column in the normalized file
pub const OUTPUT_DATE_FORMAT: &str = "%m/%d/%Y";

// Order matters: month first, as US banks export. Each `%y` goes before its
// `%Y` twin because chrono reads any digit count as `%Y` ("24" → year 24).
const INPUT_DATE_FORMATS: &[&str] = &[
    "%m/%d/%y",
    "%m/%d/%Y",
    "%Y-%m-%d",
    "%m-%d-%y",
    "%m-%d-%Y",
    "%Y/%m/%d",
    "%d/%m/%Y",
];

/// A date taken from a statement's `Date` column.
///
/// Dates usually come in formats such as:
/// - MM/DD/YYYY (Chase, Bank of America)
/// - MM/DD/YY
/// - YYYY-MM-DD
///
/// A trailing time component ("01/05/2024 00:00:00") is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementDate(String);

impl StatementDate {
    /// Tries each known format in turn. A `%Y` match needs a four-digit year.
    pub fn parse(&self) -> Option<NaiveDate> {
        let s = self.0.trim();
        let day_part = s.split_whitespace().next()?;

        INPUT_DATE_FORMATS.iter().find_map(|fmt| {
            NaiveDate::parse_from_str(day_part, fmt)
                .ok()
                .filter(|date| !fmt.contains("%Y") || date.year() >= 1000)
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Renders the date as `MM/DD/YYYY`
pub fn format_date(date: NaiveDate) -> String {
    date.format(OUTPUT_DATE_FORMAT).to_string()
}

impl From<String> for StatementDate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for StatementDate {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
