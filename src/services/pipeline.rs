//! The normalization pipeline
//!
//! Wires the stages together: reconcile columns, repair merged cells,
//! normalize amounts, group into voucher units, then classify each unit
//! and derive a renderer-ready `VoucherRecord` for every cash-tagged one.
//!
//! The whole run is a pure in-memory transform; identical input bytes give
//! identical output. A run that produces no records is not an error: the
//! report carries enough counts to tell "the table was full of non-cash
//! vouchers" apart from "the table was unreadable" (the latter is the only
//! `Err`).

use tracing::{debug, info};

use crate::config::Settings;
use crate::error::VoucherResult;
use crate::models::{DocumentType, RawTable, Side, VoucherRecord};
use crate::services::{
    business_date, capital_amount, classify, counterparty, fill, group, normalize, reconcile,
};

/// Outcome of one pipeline run
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Voucher records in first-occurrence unit order
    pub records: Vec<VoucherRecord>,
    /// Rows in the source table
    pub rows_total: usize,
    /// Rows surviving amount cleaning
    pub rows_kept: usize,
    /// Voucher units formed
    pub units_total: usize,
    /// Units skipped for having no cash leg
    pub units_skipped: usize,
}

impl RunReport {
    /// Number of receipt documents (cash debit)
    pub fn receipt_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.side == Side::Debit)
            .count()
    }

    /// Number of payment voucher documents (cash credit)
    pub fn payment_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.side == Side::Credit)
            .count()
    }

    /// True when the table was readable but no unit touched cash
    pub fn no_cash_vouchers(&self) -> bool {
        self.records.is_empty() && self.units_total > 0
    }
}

/// The voucher derivation engine
#[derive(Debug, Clone, Default)]
pub struct Engine {
    settings: Settings,
}

impl Engine {
    /// Create an engine with the given settings
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Engine settings in use
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run the full pipeline over one decoded table
    pub fn run(&self, table: &RawTable) -> VoucherResult<RunReport> {
        let rows_total = table.row_count();

        let mut mapped = reconcile::reconcile(table, &self.settings)?;
        fill::fill_forward(&mut mapped);
        let rows = normalize::normalize(mapped, &self.settings);
        let rows_kept = rows.len();
        let units = group::group(rows);
        let units_total = units.len();

        let mut records = Vec::new();
        let mut units_skipped = 0usize;

        for unit in &units {
            let Some(cash) = classify::classify(unit, &self.settings) else {
                units_skipped += 1;
                continue;
            };

            let doc_type = DocumentType::from(cash.side);
            let counterparty = counterparty::extract(unit, &cash, &self.settings);
            let date_text = (!unit.date.is_empty()).then_some(unit.date.as_str());
            let business_date = business_date::resolve(date_text, doc_type, &self.settings);
            let amount = cash.amount();

            // The cash leg's own narrative is the most specific reason text;
            // the unit's representative summary covers legs without one
            let summary = cash
                .leg
                .summary
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| unit.summary.clone());

            debug!(
                "voucher {} {}: {} {} {}",
                unit.voucher_id, unit.date, doc_type, amount, counterparty
            );

            records.push(VoucherRecord {
                date: unit.date.clone(),
                voucher_id: unit.voucher_id.clone(),
                summary,
                account: cash.leg.account_text().to_string(),
                amount,
                side: cash.side,
                counterparty,
                business_date,
                amount_in_words: capital_amount::to_capital(amount),
            });
        }

        info!(
            "{} rows -> {} units -> {} records ({} receipts, {} payments)",
            rows_total,
            units_total,
            records.len(),
            records.iter().filter(|r| r.side == Side::Debit).count(),
            records.iter().filter(|r| r.side == Side::Credit).count(),
        );

        Ok(RunReport {
            records,
            rows_total,
            rows_kept,
            units_total,
            units_skipped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn table(rows: &[&[&str]]) -> RawTable {
        RawTable::new(
            ["日期", "凭证字号", "摘要", "科目", "借方金额", "贷方金额"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_cash_debit_becomes_receipt_record() {
        // Borrowed cash: cash debit, payable credit naming the lender
        let t = table(&[
            &[
                "2024-03-05",
                "记-01",
                "收到借款",
                "1001 库存现金",
                "1000",
                "0",
            ],
            &[
                "2024-03-05",
                "记-01",
                "收到借款",
                "2241 其他应付款-张三",
                "0",
                "1000",
            ],
        ]);
        let report = Engine::default().run(&t).unwrap();

        assert_eq!(report.records.len(), 1);
        let rec = &report.records[0];
        assert_eq!(rec.side, Side::Debit);
        assert_eq!(rec.document_type(), DocumentType::Receipt);
        assert_eq!(rec.amount, Money::from_yuan(1000));
        assert_eq!(rec.counterparty, "张三");
        assert_eq!(rec.summary, "收到借款");
        assert_eq!(rec.amount_in_words, "壹仟元整");
        // March 1st 2024 is a Friday
        assert_eq!(
            rec.business_date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(report.receipt_count(), 1);
        assert_eq!(report.payment_count(), 0);
    }

    #[test]
    fn test_merged_cells_join_the_same_unit() {
        // Second row's blank date/voucher cells fill forward into the
        // same unit
        let t = table(&[
            &["2024-03-05", "记-01", "借出现金", "2241-李四", "500", "0"],
            &["", "", "借出现金", "1001 库存现金", "0", "500"],
        ]);
        let report = Engine::default().run(&t).unwrap();

        assert_eq!(report.units_total, 1);
        assert_eq!(report.records.len(), 1);
        let rec = &report.records[0];
        assert_eq!(rec.side, Side::Credit);
        assert_eq!(rec.document_type(), DocumentType::Payment);
        assert_eq!(rec.counterparty, "李四");
    }

    #[test]
    fn test_non_cash_units_produce_nothing() {
        let t = table(&[
            &["2024-03-05", "记-01", "转账", "1002 银行存款", "800", "0"],
            &["2024-03-05", "记-01", "转账", "2241-王五", "0", "800"],
        ]);
        let report = Engine::default().run(&t).unwrap();

        assert!(report.records.is_empty());
        assert!(report.no_cash_vouchers());
        assert_eq!(report.units_total, 1);
        assert_eq!(report.units_skipped, 1);
    }

    #[test]
    fn test_empty_table_is_error_not_empty_report() {
        let t = table(&[]);
        assert!(Engine::default().run(&t).unwrap_err().is_schema());
    }

    #[test]
    fn test_output_order_follows_first_occurrence() {
        let t = table(&[
            &["2024-03-09", "记-02", "付款", "1001 现金", "0", "200"],
            &["2024-03-09", "记-02", "付款", "6602-甲", "200", "0"],
            &["2024-03-05", "记-01", "收款", "1001 现金", "100", "0"],
            &["2024-03-05", "记-01", "收款", "2241-乙", "0", "100"],
        ]);
        let report = Engine::default().run(&t).unwrap();
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.records[0].voucher_id, "记-02");
        assert_eq!(report.records[1].voucher_id, "记-01");
    }

    #[test]
    fn test_run_is_idempotent() {
        let t = table(&[
            &["2024-03-05", "记-01", "收到借款", "1001 现金", "1000", "0"],
            &["", "", "收到借款", "2241-张三", "0", "1000"],
            &["2024-03-07", "记-02", "付房租", "1001 现金", "0", "2500.50"],
            &["", "", "付房租", "6602 管理费用", "2500.50", "0"],
        ]);
        let engine = Engine::default();
        let a = engine.run(&t).unwrap();
        let b = engine.run(&t).unwrap();
        assert_eq!(
            serde_json::to_string(&a.records).unwrap(),
            serde_json::to_string(&b.records).unwrap()
        );
        assert_eq!(a.rows_kept, b.rows_kept);
    }

    #[test]
    fn test_total_rows_are_dropped_but_run_succeeds() {
        // A trailing total row with no amounts parses to zero/zero and
        // disappears without failing anything
        let t = table(&[
            &["2024-03-05", "记-01", "收款", "1001 现金", "300", "0"],
            &["2024-03-05", "记-01", "收款", "2241-丙", "0", "300"],
            &["", "", "合计", "", "", ""],
        ]);
        let report = Engine::default().run(&t).unwrap();
        assert_eq!(report.rows_total, 3);
        assert_eq!(report.rows_kept, 2);
        assert_eq!(report.records.len(), 1);
    }
}
