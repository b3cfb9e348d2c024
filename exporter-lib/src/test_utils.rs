// Test utilities available to both unit and integration tests
// Only compiled when testing

use calamine::Data;

use crate::ExhibitorRecord;
use crate::row_loader::EXPECTED_HEADER;
use crate::source::SourceRow;

/// Header row exactly as it appears in the official workbook
#[allow(dead_code)]
pub fn header_row() -> SourceRow {
    let mut row = vec![Data::String("No.".to_string())];
    row.extend(EXPECTED_HEADER.iter().map(|label| text(label)));
    row
}

/// String cell, or an empty cell for ""
#[allow(dead_code)]
pub fn text(value: &str) -> Data {
    if value.is_empty() {
        Data::Empty
    } else {
        Data::String(value.to_string())
    }
}

/// Data row typed the way calamine reports a hand-filled sheet: numbers as floats
#[allow(dead_code)]
pub fn data_row(index: u32, name: &str, zone: &str, date: &str, booth: Option<u32>) -> SourceRow {
    vec![
        Data::Float(index as f64),
        text(name),
        text(zone),
        text(date),
        booth.map_or(Data::Empty, |b| Data::Float(b as f64)),
    ]
}

/// Factory for an already validated record
#[allow(dead_code)]
pub fn record(
    index: u32,
    name: &str,
    zone: &str,
    date: &str,
    booth: Option<u32>,
) -> ExhibitorRecord {
    ExhibitorRecord {
        sequence_index: index,
        organization_name: name.to_string(),
        zone: zone.to_string(),
        attendance_date: date.to_string(),
        booth_number: booth,
    }
}

/// Render rows as CSV text, for tests that go through a file on disk
#[allow(dead_code)]
pub fn rows_to_csv(rows: &[SourceRow]) -> String {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());
    for row in rows {
        let fields: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Data::Empty => String::new(),
                Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
                other => other.to_string(),
            })
            .collect();
        writer.write_record(&fields).unwrap();
    }
    String::from_utf8(writer.into_inner().unwrap()).unwrap()
}
