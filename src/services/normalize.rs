//! Amount normalization
//!
//! Turns mapped rows with textual amounts into ledger rows with exact
//! `Money` values. Unparsable amounts degrade to zero rather than failing;
//! rows with zero on both sides are not meaningful ledger legs and are
//! dropped. Rows carrying an amount on both sides are handled per the
//! configured policy.

use tracing::{debug, warn};

use crate::config::{BothSidesPolicy, Settings};
use crate::models::{LedgerRow, MappedRow, Money};

/// Parse an amount cell, degrading unparsable or absent text to zero
fn parse_amount(cell: Option<&str>, what: &str) -> Money {
    match cell {
        None => Money::zero(),
        Some(text) => Money::parse(text).unwrap_or_else(|| {
            warn!("unparsable {} amount {:?}, treating as zero", what, text);
            Money::zero()
        }),
    }
}

/// Normalize mapped rows into ledger rows, dropping rows with no amount
pub fn normalize(rows: Vec<MappedRow>, settings: &Settings) -> Vec<LedgerRow> {
    let initial = rows.len();
    let mut out = Vec::with_capacity(initial);

    for row in rows {
        let mut debit = parse_amount(row.debit.as_deref(), "debit");
        let mut credit = parse_amount(row.credit.as_deref(), "credit");

        if debit.is_zero() && credit.is_zero() {
            continue;
        }

        if !debit.is_zero() && !credit.is_zero() {
            match settings.both_sides_policy {
                BothSidesPolicy::Passthrough => {}
                BothSidesPolicy::Drop => {
                    warn!(
                        "dropping row with amounts on both sides (debit {}, credit {})",
                        debit, credit
                    );
                    continue;
                }
                BothSidesPolicy::Larger => {
                    if debit.abs() >= credit.abs() {
                        credit = Money::zero();
                    } else {
                        debit = Money::zero();
                    }
                }
            }
        }

        out.push(LedgerRow {
            date: row.date,
            voucher_id: row.voucher_id,
            summary: row.summary,
            account: row.account,
            debit,
            credit,
        });
    }

    debug!("amount cleaning kept {} of {} rows", out.len(), initial);
    out
}
