//! voucher-cli - Cash voucher generation from messy ledger exports
//!
//! This library ingests a loosely structured export of double-entry
//! bookkeeping transactions and derives, per transaction group, a normalized
//! cash voucher record suitable for populating a printed receipt (cash
//! debited) or payment voucher (cash credited).
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: engine settings (cash markers, policies, thresholds)
//! - `error`: custom error types
//! - `models`: core data models (raw tables, ledger rows, voucher records)
//! - `reader`: CSV input boundary
//! - `services`: the normalization and inference engine
//! - `display`: terminal formatting
//! - `export`: CSV/JSON output boundary for the document renderer
//! - `cli`: command handlers
//!
//! # Example
//!
//! ```rust
//! use voucher_cli::models::RawTable;
//! use voucher_cli::services::Engine;
//!
//! let table = RawTable::new(
//!     vec!["日期".into(), "凭证字号".into(), "摘要".into(),
//!          "科目".into(), "借方金额".into(), "贷方金额".into()],
//!     vec![
//!         vec!["2024-03-05".into(), "记-01".into(), "收到借款".into(),
//!              "1001 库存现金".into(), "1000".into(), "0".into()],
//!         vec!["".into(), "".into(), "收到借款".into(),
//!              "2241-张三".into(), "0".into(), "1000".into()],
//!     ],
//! );
//! let report = Engine::default().run(&table).unwrap();
//! assert_eq!(report.records.len(), 1);
//! assert_eq!(report.records[0].counterparty, "张三");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reader;
pub mod services;

pub use error::{VoucherError, VoucherResult};
