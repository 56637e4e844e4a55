//! Normalize Chase and Bank of America credit card CSV exports into one
//! `Date, Description, Credit, Debit` layout.
//!
//! ```rust,ignore
//! use bank_statement_normalizer::StatementProcessor;
//!
//! let processed = StatementProcessor::new()
//!     .input("Chase_Activity.csv")
//!     .process()?;
//! println!("File saved to {}", processed.output_path.display());
//! ```

mod builder;
mod types;

pub mod bank;
pub mod config;
pub mod date;
pub mod errors;
pub mod logging;
pub mod naming;
pub mod pipeline;
pub mod table;

pub use bank::{Bank, BankProfile};
pub use builder::{ProcessedStatement, StatementProcessor};
pub use config::Settings;
pub use errors::{Stage, StatementError, StatementResult};
pub use types::{NormalizedRecord, SplitRecord, Table, Transaction};
