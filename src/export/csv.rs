//! CSV export of voucher records
//!
//! Writes the fields the document renderer consumes, one record per line.

use std::io::Write;

use crate::error::{VoucherError, VoucherResult};
use crate::models::VoucherRecord;

/// Write voucher records as CSV
pub fn export_vouchers_csv<W: Write>(records: &[VoucherRecord], writer: &mut W) -> VoucherResult<()> {
    writeln!(
        writer,
        "Date,Voucher,Document,BusinessDate,Counterparty,Summary,Amount,AmountInWords,Account"
    )
    .map_err(|e| VoucherError::Export(e.to_string()))?;

    for rec in records {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{},{}",
            escape_csv(&rec.date),
            escape_csv(&rec.voucher_id),
            rec.document_type(),
            rec.business_date.format("%Y-%m-%d"),
            escape_csv(&rec.counterparty),
            escape_csv(&rec.summary),
            rec.amount.to_decimal_string(),
            escape_csv(&rec.amount_in_words),
            escape_csv(&rec.account),
        )
        .map_err(|e| VoucherError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Escape a value for CSV output
fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
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
            summary: "收到借款, 含利息".into(),
            account: "1001 库存现金".into(),
            amount: Money::from_fen(100_050),
            side: Side::Debit,
            counterparty: "张三".into(),
            business_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            amount_in_words: "壹仟元伍角".into(),
        }
    }

    #[test]
    fn test_export_header_and_row() {
        let mut buf = Vec::new();
        export_vouchers_csv(&[record()], &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("Date,Voucher,Document"));
        let row = lines.next().unwrap();
        assert!(row.contains("收款收据"));
        assert!(row.contains("1000.50"));
        // Comma inside the summary forces quoting
        assert!(row.contains("\"收到借款, 含利息\""));
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
