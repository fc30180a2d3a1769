//! Input boundary: decoding ledger exports into raw tables
//!
//! Only CSV decoding lives here. Spreadsheet formats (xls/xlsx/XML) should
//! be converted to CSV upstream; engine semantics start at `RawTable` and do
//! not depend on the source serialization.

pub mod csv;

pub use csv::{read_table, read_table_from_path};
