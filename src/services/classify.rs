//! Cash-leg classification
//!
//! Decides whether a voucher unit moved physical cash, and on which side.
//! A leg is a candidate when its account text contains one of the
//! configured cash markers (account code "1001" or "库存现金" by default).
//! The first candidate in source order with a positive debit wins as a
//! debit-side cash leg; failing that, the first with a positive credit wins
//! as credit-side. Units with no winner produce no voucher at all, which is
//! the primary filter deciding what gets printed.

use tracing::debug;

use crate::config::Settings;
use crate::models::{CashClassification, Side, VoucherUnit};

/// Find the authoritative cash leg of a unit, if any
pub fn classify(unit: &VoucherUnit, settings: &Settings) -> Option<CashClassification> {
    let candidates = || {
        unit.legs
            .iter()
            .filter(|leg| settings.is_cash_account(leg.account_text()))
    };

    let winner = candidates()
        .find(|leg| leg.debit.is_positive())
        .map(|leg| (leg, Side::Debit))
        .or_else(|| {
            candidates()
                .find(|leg| leg.credit.is_positive())
                .map(|leg| (leg, Side::Credit))
        });

    match winner {
        Some((leg, side)) => {
            debug!(
                "voucher {} classified as cash {} of {}",
                unit.voucher_id,
                side,
                leg.amount_on(side)
            );
            Some(CashClassification {
                leg: leg.clone(),
                side,
            })
        }
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LedgerRow, Money};

    fn leg(account: &str, debit: i64, credit: i64) -> LedgerRow {
        LedgerRow {
            account: Some(account.to_string()),
            debit: Money::from_yuan(debit),
            credit: Money::from_yuan(credit),
            ..Default::default()
        }
    }

    fn unit(legs: Vec<LedgerRow>) -> VoucherUnit {
        VoucherUnit {
            date: "2024-03-05".into(),
            voucher_id: "记-01".into(),
            summary: String::new(),
            legs,
        }
    }

    #[test]
    fn test_debit_side_cash_leg() {
        let u = unit(vec![
            leg("1001 库存现金", 1000, 0),
            leg("2241-张三", 0, 1000),
        ]);
        let cls = classify(&u, &Settings::default()).unwrap();
        assert_eq!(cls.side, Side::Debit);
        assert_eq!(cls.amount(), Money::from_yuan(1000));
    }

    #[test]
    fn test_credit_side_cash_leg() {
        let u = unit(vec![
            leg("6602 管理费用", 300, 0),
            leg("库存现金", 0, 300),
        ]);
        let cls = classify(&u, &Settings::default()).unwrap();
        assert_eq!(cls.side, Side::Credit);
        assert_eq!(cls.amount(), Money::from_yuan(300));
    }

    #[test]
    fn test_no_cash_leg() {
        let u = unit(vec![
            leg("1002 银行存款", 500, 0),
            leg("2241-李四", 0, 500),
        ]);
        assert!(classify(&u, &Settings::default()).is_none());
    }

    #[test]
    fn test_debit_candidate_beats_earlier_credit_candidate() {
        // A cash leg with only a credit amount comes first, but a later
        // debit-side cash leg takes precedence
        let u = unit(vec![
            leg("1001 库存现金", 0, 200),
            leg("1001 库存现金", 150, 0),
        ]);
        let cls = classify(&u, &Settings::default()).unwrap();
        assert_eq!(cls.side, Side::Debit);
        assert_eq!(cls.amount(), Money::from_yuan(150));
    }

    #[test]
    fn test_first_matching_candidate_wins() {
        let u = unit(vec![
            leg("1001 库存现金", 100, 0),
            leg("1001 库存现金", 250, 0),
        ]);
        let cls = classify(&u, &Settings::default()).unwrap();
        assert_eq!(cls.amount(), Money::from_yuan(100));
    }

    #[test]
    fn test_cash_marker_with_zero_amount_is_ignored() {
        let u = unit(vec![leg("1001 库存现金", 0, 0)]);
        assert!(classify(&u, &Settings::default()).is_none());
    }

    #[test]
    fn test_custom_markers() {
        let settings = Settings {
            cash_markers: vec!["1002".into()],
            ..Default::default()
        };
        let u = unit(vec![leg("1002 银行存款", 500, 0)]);
        assert!(classify(&u, &settings).is_some());
        assert!(classify(&u, &Settings::default()).is_none());
    }
}
