//! Voucher unit and record models
//!
//! A voucher unit is the set of ledger legs belonging to one transaction,
//! grouped by date and voucher identifier. Units whose legs touch a cash
//! account produce a `VoucherRecord`, the immutable output consumed by the
//! document renderer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ledger::{DocumentType, LedgerRow, Side};
use super::money::Money;

/// One transaction's worth of ledger legs, keyed by `(date, voucher_id)`
#[derive(Debug, Clone, Default)]
pub struct VoucherUnit {
    /// Date text shared by the legs (may be empty if the export had none)
    pub date: String,
    /// Voucher identifier, possibly synthesized for unidentified rows
    pub voucher_id: String,
    /// Representative summary: the first leg's summary in source order
    pub summary: String,
    /// Legs in original row order
    pub legs: Vec<LedgerRow>,
}

/// Result of scanning a voucher unit for a cash-account leg
#[derive(Debug, Clone)]
pub struct CashClassification {
    /// The authoritative cash leg (first match in source order)
    pub leg: LedgerRow,
    /// Side of the cash leg's positive amount
    pub side: Side,
}

impl CashClassification {
    /// Amount of the cash movement
    pub fn amount(&self) -> Money {
        self.leg.amount_on(self.side)
    }
}

/// Engine output: everything the document renderer needs to populate one
/// printed receipt or payment voucher. Created once per cash-tagged unit
/// and immutable afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoucherRecord {
    /// Transaction date text from the ledger
    pub date: String,
    /// Voucher identifier
    pub voucher_id: String,
    /// Narrative summary (the document's "reason" cell)
    pub summary: String,
    /// Account text of the cash leg
    pub account: String,
    /// Cash amount
    pub amount: Money,
    /// Side of the cash leg; determines the document type
    pub side: Side,
    /// Inferred counterparty name (best effort)
    pub counterparty: String,
    /// Resolved document date (per-type day-of-month, weekend rolled over)
    pub business_date: NaiveDate,
    /// Capital-numeral rendering of `amount` (大写金额)
    pub amount_in_words: String,
}

impl VoucherRecord {
    /// Which printed template this record populates
    pub fn document_type(&self) -> DocumentType {
        self.side.into()
    }
}
