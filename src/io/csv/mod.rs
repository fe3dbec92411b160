//! Semicolon-delimited registry export.

mod read;

pub use read::read_records;
