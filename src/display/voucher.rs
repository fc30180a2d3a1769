//! Voucher record display formatting
//!
//! Renders voucher records and run summaries for the terminal.

use tabled::{Table, Tabled};

use crate::models::{Side, VoucherRecord};
use crate::services::RunReport;

/// One row of the terminal voucher table
#[derive(Tabled)]
struct VoucherTableRow {
    #[tabled(rename = "凭证字号")]
    voucher_id: String,
    #[tabled(rename = "单据")]
    document: String,
    #[tabled(rename = "日期")]
    business_date: String,
    #[tabled(rename = "对方")]
    counterparty: String,
    #[tabled(rename = "金额")]
    amount: String,
    #[tabled(rename = "大写")]
    amount_in_words: String,
    #[tabled(rename = "摘要")]
    summary: String,
}

impl From<&VoucherRecord> for VoucherTableRow {
    fn from(rec: &VoucherRecord) -> Self {
        Self {
            voucher_id: rec.voucher_id.clone(),
            document: rec.document_type().to_string(),
            business_date: rec.business_date.format("%Y-%m-%d").to_string(),
            counterparty: rec.counterparty.clone(),
            amount: rec.amount.to_string(),
            amount_in_words: rec.amount_in_words.clone(),
            summary: truncate(&rec.summary, 20),
        }
    }
}

/// Format records as a terminal table
pub fn format_voucher_table(records: &[VoucherRecord]) -> String {
    if records.is_empty() {
        return "No vouchers.\n".to_string();
    }
    Table::new(records.iter().map(VoucherTableRow::from)).to_string()
}

/// One-paragraph summary of a pipeline run.
///
/// An empty result names its cause explicitly; "nothing came out" must be
/// distinguishable from "nothing went in".
pub fn format_run_summary(report: &RunReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} rows read, {} kept after amount cleaning, {} voucher units\n",
        report.rows_total, report.rows_kept, report.units_total
    ));
    out.push_str(&format!(
        "{} receipts (收款收据), {} payment vouchers (领款凭证), {} units without a cash leg\n",
        report.receipt_count(),
        report.payment_count(),
        report.units_skipped
    ));
    if report.no_cash_vouchers() {
        out.push_str(
            "No cash vouchers found: no unit carries a cash account \
             (科目 containing a configured cash marker).\n",
        );
    }
    out
}

/// Format a single record the way it lands on the printed document
pub fn format_voucher_detail(rec: &VoucherRecord) -> String {
    let party_label = match rec.side {
        Side::Debit => "交款人",
        Side::Credit => "领款人",
    };
    format!(
        "{} {} | {}: {} | {} | {} ({})\n",
        rec.document_type(),
        rec.business_date.format("%Y年%m月%d日"),
        party_label,
        rec.counterparty,
        rec.summary,
        rec.amount,
        rec.amount_in_words
    )
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        format!("{}…", s.chars().take(max_chars).collect::<String>())
    }
}
