//! `voucher inspect` command handler
//!
//! Shows what the engine makes of a messy export before classification:
//! the normalized ledger rows and how they group into voucher units. Meant
//! for debugging exports that produce fewer vouchers than expected.

use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::VoucherResult;
use crate::reader;
use crate::services::{classify, fill, group, normalize, reconcile};

/// Arguments for the inspect command
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Path to the CSV ledger export
    pub file: PathBuf,

    /// Path to a JSON settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Handle the inspect command
pub fn handle_inspect_command(args: &InspectArgs) -> VoucherResult<()> {
    let settings = Settings::load_or_default(args.config.as_deref())?;
    let table = reader::read_table_from_path(&args.file)?;

    let mut mapped = reconcile::reconcile(&table, &settings)?;
    fill::fill_forward(&mut mapped);
    let rows = normalize::normalize(mapped, &settings);
    let units = group::group(rows);

    println!("{} voucher units:", units.len());
    for unit in &units {
        let cash = classify::classify(unit, &settings);
        let verdict = match &cash {
            Some(c) => format!("cash {} {}", c.side, c.amount()),
            None => "no cash leg".to_string(),
        };
        println!(
            "\n[{} {}] {} ({})",
            unit.date, unit.voucher_id, unit.summary, verdict
        );
        for leg in &unit.legs {
            println!(
                "  {:40} 借 {:>12} 贷 {:>12}",
                leg.account_text(),
                leg.debit.to_decimal_string(),
                leg.credit.to_decimal_string()
            );
        }
    }

    Ok(())
}
