//! The ledger normalization and inference engine
//!
//! Each stage is a standalone module; `pipeline` wires them in order:
//! reconcile -> fill -> normalize -> group, then per voucher unit
//! classify -> counterparty / business_date / capital_amount.

pub mod business_date;
pub mod capital_amount;
pub mod classify;
pub mod counterparty;
pub mod fill;
pub mod group;
pub mod normalize;
pub mod pipeline;
pub mod reconcile;

pub use pipeline::{Engine, RunReport};
