//! Merged-cell repair
//!
//! Spreadsheet exports commonly merge the date and voucher-id cells across
//! a voucher's legs, so only the first leg row carries them. This pass
//! forward-fills both fields independently: each absent value takes the
//! nearest preceding non-absent value. Leading absences (no predecessor)
//! stay absent.

use tracing::debug;

use crate::models::MappedRow;

/// Forward-fill date and voucher-id across the row sequence, in place
pub fn fill_forward(rows: &mut [MappedRow]) {
    let mut last_date: Option<String> = None;
    let mut last_voucher: Option<String> = None;
    let mut filled = 0usize;

    for row in rows.iter_mut() {
        match &row.date {
            Some(d) => last_date = Some(d.clone()),
            None => {
                if last_date.is_some() {
                    row.date = last_date.clone();
                    filled += 1;
                }
            }
        }
        match &row.voucher_id {
            Some(v) => last_voucher = Some(v.clone()),
            None => {
                if last_voucher.is_some() {
                    row.voucher_id = last_voucher.clone();
                    filled += 1;
                }
            }
        }
    }

    if filled > 0 {
        debug!("forward-filled {} merged cells", filled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: Option<&str>, voucher: Option<&str>) -> MappedRow {
        MappedRow {
            date: date.map(String::from),
            voucher_id: voucher.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_fills_from_preceding_row() {
        let mut rows = vec![
            row(Some("2024-03-05"), Some("记-01")),
            row(None, None),
            row(None, None),
        ];
        fill_forward(&mut rows);
        for r in &rows {
            assert_eq!(r.date.as_deref(), Some("2024-03-05"));
            assert_eq!(r.voucher_id.as_deref(), Some("记-01"));
        }
    }

    #[test]
    fn test_fields_fill_independently() {
        let mut rows = vec![
            row(Some("2024-03-05"), None),
            row(None, Some("记-02")),
            row(None, None),
        ];
        fill_forward(&mut rows);
        assert_eq!(rows[0].voucher_id, None);
        assert_eq!(rows[1].date.as_deref(), Some("2024-03-05"));
        assert_eq!(rows[2].date.as_deref(), Some("2024-03-05"));
        assert_eq!(rows[2].voucher_id.as_deref(), Some("记-02"));
    }

    #[test]
    fn test_leading_absence_stays_absent() {
        let mut rows = vec![row(None, None), row(Some("2024-04-01"), Some("记-03"))];
        fill_forward(&mut rows);
        assert_eq!(rows[0].date, None);
        assert_eq!(rows[0].voucher_id, None);
    }

    #[test]
    fn test_new_value_resets_fill() {
        let mut rows = vec![
            row(Some("2024-03-05"), Some("记-01")),
            row(None, None),
            row(Some("2024-03-09"), Some("记-02")),
            row(None, None),
        ];
        fill_forward(&mut rows);
        assert_eq!(rows[1].voucher_id.as_deref(), Some("记-01"));
        assert_eq!(rows[3].date.as_deref(), Some("2024-03-09"));
        assert_eq!(rows[3].voucher_id.as_deref(), Some("记-02"));
    }
}
