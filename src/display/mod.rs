//! Terminal display formatting

pub mod voucher;

pub use voucher::{format_run_summary, format_voucher_detail, format_voucher_table};
