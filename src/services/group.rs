//! Voucher grouping
//!
//! Partitions normalized ledger rows into voucher units keyed by
//! `(date, voucher_id)`. A row without a voucher id gets a synthesized
//! per-row key so unrelated unidentified entries are never merged. Units
//! come out in first-occurrence order, and each unit's legs keep their
//! original row order; downstream "first matching leg" rules depend on both.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{LedgerRow, VoucherUnit};

/// Group ledger rows into voucher units
pub fn group(rows: Vec<LedgerRow>) -> Vec<VoucherUnit> {
    let mut units: Vec<VoucherUnit> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for (row_idx, row) in rows.into_iter().enumerate() {
        let date = row.date.clone().unwrap_or_default();
        let voucher_id = row
            .voucher_id
            .clone()
            .unwrap_or_else(|| format!("未命名_{}", row_idx));

        let key = (date.clone(), voucher_id.clone());
        let unit_idx = *index.entry(key).or_insert_with(|| {
            units.push(VoucherUnit {
                date,
                voucher_id,
                summary: row.summary.clone().unwrap_or_default(),
                legs: Vec::new(),
            });
            units.len() - 1
        });
        units[unit_idx].legs.push(row);
    }

    debug!("grouped rows into {} voucher units", units.len());
    units
}
