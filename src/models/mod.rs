//! Core data models for voucher-cli
//!
//! This module contains the data structures the normalization engine works
//! over: raw and reconciled table rows, exact monetary amounts, voucher
//! units, and the renderer-facing voucher record.

pub mod ledger;
pub mod money;
pub mod voucher;

pub use ledger::{DocumentType, LedgerRow, MappedRow, RawTable, Side};
pub use money::Money;
pub use voucher::{CashClassification, VoucherRecord, VoucherUnit};
