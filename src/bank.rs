use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

pub const DATE: &str = "Date";
pub const DESCRIPTION: &str = "Description";
pub const AMOUNT: &str = "Amount";
pub const CREDIT: &str = "Credit";
pub const DEBIT: &str = "Debit";

/// Columns, drops and renames that turn one bank's export into the canonical layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankProfile {
    pub columns: &'static [&'static str],
    pub dropped: &'static [&'static str],
    pub renames: &'static [(&'static str, &'static str)],
}

const CHASE: BankProfile = BankProfile {
    columns: &[
        "Transaction Date",
        "Post Date",
        "Description",
        "Category",
        "Type",
        "Amount",
        "Memo",
    ],
    dropped: &["Memo", "Post Date", "Type"],
    renames: &[("Transaction Date", DATE)],
};

const BANK_OF_AMERICA: BankProfile = BankProfile {
    columns: &["Posted Date", "Reference Number", "Payee", "Address", "Amount"],
    dropped: &["Reference Number", "Address"],
    renames: &[("Posted Date", DATE), ("Payee", DESCRIPTION)],
};

impl BankProfile {
    /// Exact set equality: a missing, extra or repeated column never matches.
    pub fn matches<S: AsRef<str>>(&self, headers: &[S]) -> bool {
        if headers.len() != self.columns.len() {
            return false;
        }
        let expected: HashSet<&str> = self.columns.iter().copied().collect();
        let actual: HashSet<&str> = headers.iter().map(AsRef::as_ref).collect();
        actual == expected
    }

    pub fn is_dropped(&self, column: &str) -> bool {
        self.dropped.contains(&column)
    }

    pub fn rename<'a>(&self, column: &'a str) -> &'a str {
        self.renames
            .iter()
            .find(|(from, _)| *from == column)
            .map(|(_, to)| *to)
            .unwrap_or(column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bank {
    #[serde(rename = "chase")]
    Chase,
    #[serde(rename = "bank-of-america")]
    BankOfAmerica,
    #[serde(rename = "unknown")]
    Unknown,
}

impl Bank {
    const KNOWN: [Bank; 2] = [Bank::Chase, Bank::BankOfAmerica];

    pub fn identify<S: AsRef<str>>(headers: &[S]) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|bank| bank.profile().is_some_and(|p| p.matches(headers)))
            .unwrap_or(Bank::Unknown)
    }

    pub fn profile(&self) -> Option<&'static BankProfile> {
        match self {
            Bank::Chase => Some(&CHASE),
            Bank::BankOfAmerica => Some(&BANK_OF_AMERICA),
            Bank::Unknown => None,
        }
    }

    /// Name used in the generated output file.
    pub fn display_name(&self) -> &'static str {
        match self {
            Bank::Chase => "Chase",
            Bank::BankOfAmerica => "Bank of America",
            Bank::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        &["Transaction Date", "Post Date", "Description", "Category", "Type", "Amount", "Memo"],
        Bank::Chase
    )]
    #[case(
        &["Memo", "Amount", "Type", "Category", "Description", "Post Date", "Transaction Date"],
        Bank::Chase
    )]
    #[case(&["Posted Date", "Reference Number", "Payee", "Address", "Amount"], Bank::BankOfAmerica)]
    #[case(&["Amount", "Address", "Payee", "Reference Number", "Posted Date"], Bank::BankOfAmerica)]
    #[case(&["Foo", "Bar"], Bank::Unknown)]
    #[case(&[], Bank::Unknown)]
    // missing column
    #[case(&["Posted Date", "Reference Number", "Payee", "Amount"], Bank::Unknown)]
    // superset
    #[case(
        &["Posted Date", "Reference Number", "Payee", "Address", "Amount", "Balance"],
        Bank::Unknown
    )]
    // repeated column
    #[case(
        &["Posted Date", "Reference Number", "Payee", "Address", "Amount", "Amount"],
        Bank::Unknown
    )]
    // case matters
    #[case(&["posted date", "reference number", "payee", "address", "amount"], Bank::Unknown)]
    fn test_identify(#[case] headers: &[&str], #[case] expected: Bank) {
        assert_eq!(Bank::identify(headers), expected);
    }

    #[test]
    fn test_identify_accepts_owned_headers() {
        let headers: Vec<String> = BANK_OF_AMERICA.columns.iter().map(|c| c.to_string()).collect();
        assert_eq!(Bank::identify(&headers), Bank::BankOfAmerica);
    }

    #[rstest]
    #[case(Bank::Chase, "Transaction Date", "Date")]
    #[case(Bank::Chase, "Description", "Description")]
    #[case(Bank::BankOfAmerica, "Posted Date", "Date")]
    #[case(Bank::BankOfAmerica, "Payee", "Description")]
    #[case(Bank::BankOfAmerica, "Amount", "Amount")]
    fn test_profile_rename(#[case] bank: Bank, #[case] column: &str, #[case] expected: &str) {
        assert_eq!(bank.profile().unwrap().rename(column), expected);
    }

    #[rstest]
    #[case(Bank::Chase, "Memo", true)]
    #[case(Bank::Chase, "Post Date", true)]
    #[case(Bank::Chase, "Type", true)]
    #[case(Bank::Chase, "Category", false)]
    #[case(Bank::BankOfAmerica, "Reference Number", true)]
    #[case(Bank::BankOfAmerica, "Address", true)]
    #[case(Bank::BankOfAmerica, "Payee", false)]
    fn test_profile_dropped(#[case] bank: Bank, #[case] column: &str, #[case] expected: bool) {
        assert_eq!(bank.profile().unwrap().is_dropped(column), expected);
    }

    #[test]
    fn test_unknown_has_no_profile() {
        assert!(Bank::Unknown.profile().is_none());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Bank::Chase.to_string(), "Chase");
        assert_eq!(Bank::BankOfAmerica.to_string(), "Bank of America");
    }

    #[test]
    fn test_bank_serialization() {
        let json = serde_json::to_string(&Bank::BankOfAmerica).unwrap();
        assert_eq!(json, "\"bank-of-america\"");

        let deserialized: Bank = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Bank::BankOfAmerica);
    }
}
