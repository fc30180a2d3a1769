//! JSON export of voucher records
//!
//! Emits a schema-versioned envelope so downstream renderers can check
//! compatibility before consuming.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::{VoucherError, VoucherResult};
use crate::models::VoucherRecord;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Voucher export envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoucherExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Number of records
    pub voucher_count: usize,

    /// The records, in pipeline output order
    pub vouchers: Vec<VoucherRecord>,
}

impl VoucherExport {
    /// Build an export envelope around records
    pub fn new(records: &[VoucherRecord]) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            voucher_count: records.len(),
            vouchers: records.to_vec(),
        }
    }
}

/// Write voucher records as pretty-printed JSON
pub fn export_vouchers_json<W: Write>(
    records: &[VoucherRecord],
    writer: &mut W,
) -> VoucherResult<()> {
    let export = VoucherExport::new(records);
    serde_json::to_writer_pretty(&mut *writer, &export)?;
    writer
        .write_all(b"\n")
        .map_err(|e| VoucherError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Side};
    use chrono::NaiveDate;

    fn record() -> VoucherRecord {
        VoucherRecord {
            date: "2024-03-05".into(),
            voucher_id: "记-01".into(),
            summary: "收到借款".into(),
            account: "1001 库存现金".into(),
            amount: Money::from_yuan(1000),
            side: Side::Debit,
            counterparty: "张三".into(),
            business_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            amount_in_words: "壹仟元整".into(),
        }
    }

    #[test]
    fn test_export_roundtrip() {
        let mut buf = Vec::new();
        export_vouchers_json(&[record()], &mut buf).unwrap();

        let parsed: VoucherExport = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.voucher_count, 1);
        assert_eq!(parsed.vouchers[0].counterparty, "张三");
        assert_eq!(parsed.vouchers[0].side, Side::Debit);
    }

    #[test]
    fn test_empty_export() {
        let mut buf = Vec::new();
        export_vouchers_json(&[], &mut buf).unwrap();
        let parsed: VoucherExport = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed.voucher_count, 0);
    }
}
