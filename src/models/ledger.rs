//! Ledger row models
//!
//! Represents the stages a row of a bookkeeping export passes through:
//! opaque text cells, canonically mapped (but still textual) fields, and
//! finally a normalized ledger row with exact amounts.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A decoded tabular ledger export: one header row plus data rows of opaque
/// text cells. Rows may be ragged; no schema is assumed until reconciliation.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    /// Header cells as they appeared in the source
    pub headers: Vec<String>,
    /// Data rows in source order
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Create a table from headers and rows
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Widest row in the table, headers included. Ragged exports are
    /// common, so the column count cannot be taken from the header alone.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }

    /// Check if the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A row after column reconciliation: the six canonical fields, still as
/// text. `None` marks an absent cell (blank, or a "null"/"nan" sentinel).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappedRow {
    /// Transaction date text
    pub date: Option<String>,
    /// Voucher identifier text (凭证字号)
    pub voucher_id: Option<String>,
    /// Narrative summary (摘要)
    pub summary: Option<String>,
    /// Account path or name (科目)
    pub account: Option<String>,
    /// Debit amount text, unparsed
    pub debit: Option<String>,
    /// Credit amount text, unparsed
    pub credit: Option<String>,
}

/// A fully normalized ledger leg with exact amounts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRow {
    /// Transaction date text (filled forward across merged cells)
    pub date: Option<String>,
    /// Voucher identifier text
    pub voucher_id: Option<String>,
    /// Narrative summary
    pub summary: Option<String>,
    /// Account path or name
    pub account: Option<String>,
    /// Debit amount (zero when the cell was blank or unparsable)
    pub debit: Money,
    /// Credit amount (zero when the cell was blank or unparsable)
    pub credit: Money,
}

impl LedgerRow {
    /// Account text with absent treated as empty
    pub fn account_text(&self) -> &str {
        self.account.as_deref().unwrap_or("")
    }

    /// Summary text with absent treated as empty
    pub fn summary_text(&self) -> &str {
        self.summary.as_deref().unwrap_or("")
    }

    /// Amount on the given side
    pub fn amount_on(&self, side: Side) -> Money {
        match side {
            Side::Debit => self.debit,
            Side::Credit => self.credit,
        }
    }
}

/// Which side of a double-entry leg an amount sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// 借方
    Debit,
    /// 贷方
    Credit,
}

impl Side {
    /// The offsetting side of a balanced entry
    pub fn opposite(&self) -> Side {
        match self {
            Side::Debit => Side::Credit,
            Side::Credit => Side::Debit,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Debit => write!(f, "借方"),
            Side::Credit => write!(f, "贷方"),
        }
    }
}

/// The kind of printed document a cash voucher populates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// 收款收据: cash was received (cash leg on the debit side)
    Receipt,
    /// 领款凭证: cash was paid out (cash leg on the credit side)
    Payment,
}

impl From<Side> for DocumentType {
    fn from(side: Side) -> Self {
        match side {
            Side::Debit => DocumentType::Receipt,
            Side::Credit => DocumentType::Payment,
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentType::Receipt => write!(f, "收款收据"),
            DocumentType::Payment => write!(f, "领款凭证"),
        }
    }
}
