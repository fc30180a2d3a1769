//! Output boundary: writing voucher records for the document renderer
//!
//! Stands in for the spreadsheet-template renderer at the same interface:
//! everything it would consume per record is present in both formats.

pub mod csv;
pub mod json;

pub use csv::export_vouchers_csv;
pub use json::export_vouchers_json;
