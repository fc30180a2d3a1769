//! Column reconciliation
//!
//! Maps an arbitrary-width ledger export onto the canonical six-field
//! schema: date, voucher id, summary, account, debit, credit.
//!
//! Wide tables (six or more columns) are mapped positionally and header text
//! is ignored outright; well-formed exports put the canonical fields first,
//! and their headers vary too much to be worth trusting. Narrow tables fall
//! back to keyword matching on headers, with positional defaults for
//! whatever remains unmatched. Column mismatch never fails; a table only
//! fails reconciliation when it has no data rows at all.

use tracing::{debug, warn};

use crate::config::Settings;
use crate::error::{VoucherError, VoucherResult};
use crate::models::{MappedRow, RawTable};

/// The six canonical ledger fields, in schema order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Date,
    VoucherId,
    Summary,
    Account,
    Debit,
    Credit,
}

const FIELD_ORDER: [Field; 6] = [
    Field::Date,
    Field::VoucherId,
    Field::Summary,
    Field::Account,
    Field::Debit,
    Field::Credit,
];

impl Field {
    /// Case-insensitive substrings that identify this field in a header
    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Field::Date => &["日期", "date"],
            Field::VoucherId => &["凭证", "voucher", "字号"],
            Field::Summary => &["摘要", "summary", "remark", "内容"],
            Field::Account => &["科目", "account", "subject"],
            Field::Debit => &["借方", "debit"],
            Field::Credit => &["贷方", "credit"],
        }
    }

    fn matches_header(&self, header: &str) -> bool {
        let h = header.to_lowercase();
        self.keywords().iter().any(|k| h.contains(k))
    }
}

/// Cell values meaning "no data" in common exports
const ABSENT_SENTINELS: [&str; 4] = ["null", "none", "nan", "nat"];

/// Trim a cell and normalize sentinel values to an explicit absence
fn clean_cell(cell: &str) -> Option<String> {
    let trimmed = cell.trim();
    if trimmed.is_empty() || ABSENT_SENTINELS.contains(&trimmed.to_lowercase().as_str()) {
        return None;
    }
    Some(trimmed.to_string())
}

/// Column index per canonical field, in `FIELD_ORDER` order
type ColumnMap = [Option<usize>; 6];

/// Decide which source column feeds each canonical field
fn map_columns(table: &RawTable, settings: &Settings) -> VoucherResult<ColumnMap> {
    let width = table.column_count();
    let mut map: ColumnMap = [None; 6];

    if width >= 6 {
        // Trust position over label: the first six columns are the schema
        for (slot, col) in map.iter_mut().zip(0..6) {
            *slot = Some(col);
        }
        debug!("mapped first 6 of {} columns positionally", width);
        return Ok(map);
    }

    // Narrow table: classify each header by keyword, first claim wins
    let mut unmatched = Vec::new();
    for col in 0..width {
        let header = table.headers.get(col).map(String::as_str).unwrap_or("");
        let claimed = FIELD_ORDER.iter().enumerate().find(|(slot, field)| {
            map[*slot].is_none() && field.matches_header(header)
        });
        match claimed {
            Some((slot, field)) => {
                debug!("column {} ({:?}) matched {:?}", col, header, field);
                map[slot] = Some(col);
            }
            None => unmatched.push(col),
        }
    }

    if settings.strict_schema && unmatched.len() == width {
        return Err(VoucherError::Schema(format!(
            "no header matched any known field among {:?}",
            table.headers
        )));
    }

    // Remaining columns take the first open slot in canonical order
    for col in unmatched {
        if let Some(slot) = map.iter().position(Option::is_none) {
            warn!("column {} unrecognized, defaulting to {:?}", col, FIELD_ORDER[slot]);
            map[slot] = Some(col);
        }
    }

    Ok(map)
}

/// Reconcile a raw table into canonical rows.
///
/// Fails only on a table with zero data rows; every other irregularity
/// degrades (missing fields come back as `None`).
pub fn reconcile(table: &RawTable, settings: &Settings) -> VoucherResult<Vec<MappedRow>> {
    if table.is_empty() {
        return Err(VoucherError::empty_table());
    }

    let map = map_columns(table, settings)?;
    let field_cell = |row: &[String], slot: usize| -> Option<String> {
        map[slot]
            .and_then(|col| row.get(col))
            .and_then(|cell| clean_cell(cell))
    };

    let rows = table
        .rows
        .iter()
        .map(|row| MappedRow {
            date: field_cell(row, 0),
            voucher_id: field_cell(row, 1),
            summary: field_cell(row, 2),
            account: field_cell(row, 3),
            debit: field_cell(row, 4),
            credit: field_cell(row, 5),
        })
        .collect();

    Ok(rows)
}
