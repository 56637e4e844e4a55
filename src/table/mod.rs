//! CSV boundary of the pipeline: the untyped input table and the writer for
//! the canonical output.

mod reader;
mod writer;

pub use reader::RawTable;
pub use writer::{write_path, write_table};
