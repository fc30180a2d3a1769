//! `voucher convert` command handler
//!
//! Standalone capital-numeral conversion, useful for filling a document by
//! hand.

use clap::Args;

use crate::error::{VoucherError, VoucherResult};
use crate::models::Money;
use crate::services::capital_amount;

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Amount to convert (e.g. "10000.50")
    pub amount: String,
}

/// Handle the convert command
pub fn handle_convert_command(args: &ConvertArgs) -> VoucherResult<()> {
    let amount = Money::parse(&args.amount).ok_or_else(|| {
        VoucherError::Validation(format!("not a valid amount: {:?}", args.amount))
    })?;
    println!("{}", capital_amount::to_capital(amount));
    Ok(())
}
