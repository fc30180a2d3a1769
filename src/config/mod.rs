//! Configuration for voucher-cli

pub mod settings;

pub use settings::{BothSidesPolicy, Settings};
