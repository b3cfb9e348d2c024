use calamine::Data;
use std::collections::HashMap;
use tracing::{debug, info};

use crate::source::{SourceRow, TabularSource};
use crate::utils::{format_excel_datetime, normalize_string};
use crate::{ExhibitorRecord, ExportError};

/// Labels expected in columns 1 to 4 of the header row. Column 0 is not checked.
pub const EXPECTED_HEADER: [&str; 4] = [
    "Name of Company/Organization",
    "Zone",
    "Date",
    "Booth No.",
];

const INDEX_COLUMN: usize = 0;
const NAME_COLUMN: usize = 1;
const ZONE_COLUMN: usize = 2;
const DATE_COLUMN: usize = 3;
const BOOTH_COLUMN: usize = 4;

/// Read every row of `source` and turn it into exhibitor records.
///
/// The source is fully read (and its file closed) before any row is mapped.
/// Any error aborts the whole load; no partial list is returned.
pub fn load_exhibitors(
    source: &mut dyn TabularSource,
) -> Result<Vec<ExhibitorRecord>, ExportError> {
    let rows = source.read_rows()?;
    records_from_rows(&rows)
}

/// Validate the header row and map the remaining rows, in order.
///
/// Rows whose organization name cell is empty are skipped.
pub fn records_from_rows(rows: &[SourceRow]) -> Result<Vec<ExhibitorRecord>, ExportError> {
    validate_header(rows.first().map(Vec::as_slice).unwrap_or_default())?;

    let mut records = Vec::new();
    // index -> physical row it was first seen at
    let mut seen_indexes: HashMap<u32, usize> = HashMap::new();

    for (offset, row) in rows.iter().enumerate().skip(1) {
        // 1-based row number as shown by spreadsheet applications
        let row_number = offset + 1;

        if is_blank(cell(row, NAME_COLUMN)) {
            debug!(row = row_number, "skipping row without organization name");
            continue;
        }

        let record = map_row(row, row_number)?;

        if let Some(&first_row) = seen_indexes.get(&record.sequence_index) {
            return Err(ExportError::DuplicateIndex {
                index: record.sequence_index,
                first_row,
                row: row_number,
            });
        }
        seen_indexes.insert(record.sequence_index, row_number);

        records.push(record);
    }

    info!(
        rows = rows.len().saturating_sub(1),
        records = records.len(),
        "loaded exhibitors"
    );
    Ok(records)
}

/// Compare columns 1 to 4 of the header row with [`EXPECTED_HEADER`]
fn validate_header(header: &[Data]) -> Result<(), ExportError> {
    let matches = EXPECTED_HEADER.iter().enumerate().all(|(offset, expected)| {
        normalize_string(&cell_text(cell(header, offset + 1))) == *expected
    });

    if matches {
        return Ok(());
    }

    Err(ExportError::Schema {
        expected: EXPECTED_HEADER.iter().map(|label| label.to_string()).collect(),
        actual: header.iter().map(cell_text).collect(),
    })
}

fn map_row(row: &[Data], row_number: usize) -> Result<ExhibitorRecord, ExportError> {
    let sequence_index = parse_index(cell(row, INDEX_COLUMN), row_number)?;
    let booth_number = parse_booth(cell(row, BOOTH_COLUMN), row_number)?;

    Ok(ExhibitorRecord {
        sequence_index,
        organization_name: cell_text(cell(row, NAME_COLUMN)),
        zone: cell_text(cell(row, ZONE_COLUMN)),
        attendance_date: cell_text(cell(row, DATE_COLUMN)),
        booth_number,
    })
}

/// Cell at `column`, or an empty cell for short rows
fn cell(row: &[Data], column: usize) -> &Data {
    const EMPTY: &Data = &Data::Empty;
    row.get(column).unwrap_or(EMPTY)
}

fn is_blank(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Trimmed text of a cell, whatever its type
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => format_float(*f),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        // Serials Excel cannot display keep their raw value
        Data::DateTime(dt) => {
            format_excel_datetime(dt).unwrap_or_else(|| format_float(dt.as_f64()))
        }
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
        Data::Error(e) => e.to_string(),
    }
}

/// Integral floats print without a fractional part: 12.0 -> "12"
fn format_float(f: f64) -> String {
    match float_to_integer(f) {
        Some(i) => i.to_string(),
        None => f.to_string(),
    }
}

fn float_to_integer(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// Integer value of a cell. `None` when the cell holds something else than a whole number.
fn cell_integer(cell: &Data) -> Option<i64> {
    match cell {
        Data::Int(i) => Some(*i),
        Data::Float(f) => float_to_integer(*f),
        Data::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn parse_index(cell: &Data, row_number: usize) -> Result<u32, ExportError> {
    cell_integer(cell)
        .filter(|&i| i >= 1)
        .and_then(|i| u32::try_from(i).ok())
        .ok_or_else(|| ExportError::Coercion {
            row: row_number,
            column: "index",
            expected: "a positive integer",
            value: cell_text(cell),
        })
}

fn parse_booth(cell: &Data, row_number: usize) -> Result<Option<u32>, ExportError> {
    if is_blank(cell) {
        return Ok(None);
    }

    cell_integer(cell)
        .and_then(|i| u32::try_from(i).ok())
        .map(Some)
        .ok_or_else(|| ExportError::Coercion {
            row: row_number,
            column: "booth number",
            expected: "a non-negative integer",
            value: cell_text(cell),
        })
}
