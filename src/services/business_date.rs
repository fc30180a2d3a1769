//! Business date resolution
//!
//! The printed document date is not the transaction date: receipts are
//! dated the 1st of the transaction's month and payment vouchers the 15th,
//! rolled forward past weekends to the next weekday. The transaction date
//! arrives as free-form text; a fixed list of formats is tried against its
//! first ten characters and anything unparsable falls back to today. This
//! function never fails.

use chrono::{Datelike, Local, NaiveDate, Weekday};
use tracing::debug;

use crate::config::Settings;
use crate::models::DocumentType;

/// Date formats seen in ledger exports, in trial order
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%Y年%m月%d日", "%Y.%m.%d", "%Y%m%d"];

/// Parse free-form transaction date text, if possible
fn parse_transaction_date(text: &str) -> Option<NaiveDate> {
    let head: String = text.trim().chars().take(10).collect();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&head, fmt).ok())
}

/// Last calendar day of a (year, month)
fn last_day_of_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.and_then(|d| d.pred_opt()).map(|d| d.day()).unwrap_or(28)
}

/// Resolve the document date for a voucher.
///
/// `date_text` may be absent or unparsable; the current date stands in.
pub fn resolve(date_text: Option<&str>, doc_type: DocumentType, settings: &Settings) -> NaiveDate {
    let base = date_text
        .and_then(parse_transaction_date)
        .unwrap_or_else(|| Local::now().date_naive());

    let day = match doc_type {
        DocumentType::Receipt => settings.receipt_day,
        DocumentType::Payment => settings.payment_day,
    };

    let (year, month) = (base.year(), base.month());
    let day = day.min(last_day_of_month(year, month));
    // Safe after clamping, but stay total regardless
    let mut date = NaiveDate::from_ymd_opt(year, month, day).unwrap_or(base);

    // Weekend rollover: advance day by day to the next weekday
    while matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        date = date.succ_opt().unwrap_or(date);
    }

    debug!("resolved {:?} ({}) to {}", date_text, doc_type, date);
    date
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_receipt_on_first_weekday() {
        // March 1st 2024 is a Friday
        let d = resolve(Some("2024-03-05"), DocumentType::Receipt, &Settings::default());
        assert_eq!(d, ymd(2024, 3, 1));
    }

    #[test]
    fn test_payment_on_fifteenth() {
        // March 15th 2024 is a Friday
        let d = resolve(Some("2024-03-05"), DocumentType::Payment, &Settings::default());
        assert_eq!(d, ymd(2024, 3, 15));
    }

    #[test]
    fn test_weekend_rolls_to_next_weekday_exactly() {
        // June 1st 2024 is a Saturday: roll to Monday the 3rd, never further
        let d = resolve(Some("2024-06-20"), DocumentType::Receipt, &Settings::default());
        assert_eq!(d, ymd(2024, 6, 3));

        // September 1st 2024 is a Sunday: roll one day to Monday the 2nd
        let d = resolve(Some("2024-09-09"), DocumentType::Receipt, &Settings::default());
        assert_eq!(d, ymd(2024, 9, 2));

        // June 15th 2024 is also a Saturday
        let d = resolve(Some("2024-06-20"), DocumentType::Payment, &Settings::default());
        assert_eq!(d, ymd(2024, 6, 17));
    }

    #[test]
    fn test_alternate_date_formats() {
        let s = Settings::default();
        assert_eq!(
            resolve(Some("2024/03/05"), DocumentType::Receipt, &s),
            ymd(2024, 3, 1)
        );
        assert_eq!(
            resolve(Some("2024.03.05"), DocumentType::Receipt, &s),
            ymd(2024, 3, 1)
        );
        assert_eq!(
            resolve(Some("20240305"), DocumentType::Receipt, &s),
            ymd(2024, 3, 1)
        );
        assert_eq!(
            resolve(Some("2024年3月5日"), DocumentType::Receipt, &s),
            ymd(2024, 3, 1)
        );
    }

    #[test]
    fn test_trailing_time_ignored() {
        // Only the first ten characters are considered
        let d = resolve(
            Some("2024-03-05 00:00:00"),
            DocumentType::Receipt,
            &Settings::default(),
        );
        assert_eq!(d, ymd(2024, 3, 1));
    }

    #[test]
    fn test_unparsable_falls_back_to_today() {
        let today = Local::now().date_naive();
        let d = resolve(Some("三月初五"), DocumentType::Receipt, &Settings::default());
        // Resolved within the current month regardless of the garbage input
        assert_eq!(d.year(), today.year());
        assert_eq!(d.month(), today.month());
    }

    #[test]
    fn test_absent_date_falls_back_to_today() {
        let today = Local::now().date_naive();
        let d = resolve(None, DocumentType::Payment, &Settings::default());
        assert_eq!(d.year(), today.year());
    }

    #[test]
    fn test_day_clamped_to_month_end() {
        let settings = Settings {
            payment_day: 28,
            ..Default::default()
        };
        // February 2023 has 28 days; the 28th is a Tuesday
        let d = resolve(Some("2023-02-10"), DocumentType::Payment, &settings);
        assert_eq!(d, ymd(2023, 2, 28));
    }

    #[test]
    fn test_last_day_of_month() {
        assert_eq!(last_day_of_month(2024, 2), 29);
        assert_eq!(last_day_of_month(2023, 2), 28);
        assert_eq!(last_day_of_month(2024, 12), 31);
        assert_eq!(last_day_of_month(2024, 4), 30);
    }
}
