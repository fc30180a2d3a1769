//! CSV reader boundary
//!
//! Decodes a CSV ledger export into a `RawTable` of opaque text cells.
//! The first record is taken as the header row; everything else is data.
//! No schema interpretation happens here; that is the reconciler's job.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{VoucherError, VoucherResult};
use crate::models::RawTable;

/// Read a `RawTable` from any reader producing CSV bytes
pub fn read_table<R: Read>(reader: R) -> VoucherResult<RawTable> {
    // has_headers(false) so the header row passes through as plain cells;
    // flexible(true) because merged-cell exports are frequently ragged
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut headers = Vec::new();
    let mut rows = Vec::new();

    for (idx, result) in csv_reader.records().enumerate() {
        let record = result?;
        let cells: Vec<String> = record.iter().map(|c| c.to_string()).collect();
        if idx == 0 {
            headers = cells;
        } else {
            rows.push(cells);
        }
    }

    Ok(RawTable::new(headers, rows))
}

/// Read a `RawTable` from a CSV file on disk
pub fn read_table_from_path(path: &Path) -> VoucherResult<RawTable> {
    let file = std::fs::File::open(path)
        .map_err(|e| VoucherError::Read(format!("cannot open {}: {}", path.display(), e)))?;
    read_table(file)
}
