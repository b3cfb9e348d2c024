use calamine::{Data, Range, Reader, open_workbook_auto};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::ExportError;

/// A row of cell values, formatting and formulas already dropped
pub type SourceRow = Vec<Data>;

/// Anything that can hand over a sheet as ordered rows of cell values.
///
/// Implementations read everything at once and release the underlying file
/// before returning.
pub trait TabularSource {
    fn read_rows(&mut self) -> Result<Vec<SourceRow>, ExportError>;
}

/// Pick a source for `path`: CSV for a `.csv` extension, the workbook reader otherwise.
pub fn source_for_path(path: &Path, sheet_name: Option<&str>) -> Box<dyn TabularSource> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        Box::new(CsvSource::new(path))
    } else {
        Box::new(WorkbookSource::new(path, sheet_name))
    }
}

/// Spreadsheet file (xlsx, xlsm, xlsb, xls or ods) read through calamine
pub struct WorkbookSource {
    path: PathBuf,
    sheet_name: Option<String>,
}

impl WorkbookSource {
    /// Read `sheet_name`, or the first sheet of the workbook when `None`
    pub fn new(path: impl Into<PathBuf>, sheet_name: Option<&str>) -> Self {
        WorkbookSource {
            path: path.into(),
            sheet_name: sheet_name.map(str::to_string),
        }
    }
}

impl TabularSource for WorkbookSource {
    fn read_rows(&mut self) -> Result<Vec<SourceRow>, ExportError> {
        let workbook_error = |source| ExportError::Workbook {
            path: self.path.clone(),
            source,
        };

        let mut workbook = open_workbook_auto(&self.path).map_err(workbook_error)?;

        let range = match &self.sheet_name {
            Some(name) => workbook.worksheet_range(name).map_err(workbook_error)?,
            None => workbook
                .worksheet_range_at(0)
                .ok_or_else(|| ExportError::MissingSheet {
                    path: self.path.clone(),
                })?
                .map_err(workbook_error)?,
        };

        let rows = anchor_at_origin(&range);
        info!(path = %self.path.display(), rows = rows.len(), "read workbook sheet");
        Ok(rows)
    }
}

/// calamine trims a range to its used cells; put back the empty rows and
/// columns in front of it so that row 0 / column 0 are the sheet's A1.
fn anchor_at_origin(range: &Range<Data>) -> Vec<SourceRow> {
    let (start_row, start_col) = match range.start() {
        Some(start) => start,
        None => return Vec::new(),
    };

    let mut rows: Vec<SourceRow> = (0..start_row).map(|_| Vec::new()).collect();
    for row in range.rows() {
        let mut cells = vec![Data::Empty; start_col as usize];
        cells.extend(row.iter().cloned());
        rows.push(cells);
    }
    rows
}

/// Comma separated file with the same layout as the workbook sheet
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvSource { path: path.into() }
    }
}

impl TabularSource for CsvSource {
    fn read_rows(&mut self) -> Result<Vec<SourceRow>, ExportError> {
        let csv_error = |source| ExportError::Csv {
            path: self.path.clone(),
            source,
        };

        // Header row is validated by the loader like any workbook header
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .map_err(csv_error)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(csv_error)?;
            let cells = record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        Data::Empty
                    } else {
                        Data::String(field.to_string())
                    }
                })
                .collect();
            rows.push(cells);
        }

        info!(path = %self.path.display(), rows = rows.len(), "read CSV file");
        Ok(rows)
    }
}

/// Rows already held in memory
#[derive(Debug, Clone, Default)]
pub struct RowsSource {
    rows: Vec<SourceRow>,
}

impl RowsSource {
    pub fn new(rows: Vec<SourceRow>) -> Self {
        RowsSource { rows }
    }
}

impl TabularSource for RowsSource {
    fn read_rows(&mut self) -> Result<Vec<SourceRow>, ExportError> {
        Ok(self.rows.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_source_for_path_reads_csv_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".CSV").tempfile().unwrap();
        writeln!(file, "No.,Name").unwrap();
        writeln!(file, "1,Acme").unwrap();

        let mut source = source_for_path(file.path(), None);
        let rows = source.read_rows().unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][1], Data::String("Acme".to_string()));
    }

    #[test]
    fn test_csv_source_empty_fields_are_empty_cells() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "1,Acme,,Day 1,").unwrap();
        writeln!(file, "2,\"Quoted, Inc.\"").unwrap();

        let rows = CsvSource::new(file.path()).read_rows().unwrap();

        assert_eq!(
            rows[0],
            vec![
                Data::String("1".to_string()),
                Data::String("Acme".to_string()),
                Data::Empty,
                Data::String("Day 1".to_string()),
                Data::Empty,
            ]
        );
        // Ragged rows are kept as they are
        assert_eq!(rows[1].len(), 2);
        assert_eq!(rows[1][1], Data::String("Quoted, Inc.".to_string()));
    }

    #[test]
    fn test_csv_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CsvSource::new(dir.path().join("missing.csv"))
            .read_rows()
            .unwrap_err();
        assert!(matches!(err, ExportError::Csv { .. }));
    }

    #[test]
    fn test_workbook_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = WorkbookSource::new(dir.path().join("missing.xlsx"), None)
            .read_rows()
            .unwrap_err();
        assert!(matches!(err, ExportError::Workbook { .. }));
    }

    #[test]
    fn test_anchor_at_origin_pads_leading_rows_and_columns() {
        let mut range = Range::new((1, 1), (2, 2));
        range.set_value((1, 1), Data::String("Name".to_string()));
        range.set_value((2, 2), Data::Int(3));

        let rows = anchor_at_origin(&range);

        assert_eq!(rows.len(), 3);
        assert!(rows[0].is_empty());
        assert_eq!(
            rows[1],
            vec![Data::Empty, Data::String("Name".to_string()), Data::Empty]
        );
        assert_eq!(rows[2], vec![Data::Empty, Data::Empty, Data::Int(3)]);
    }

    #[test]
    fn test_anchor_at_origin_empty_range() {
        let range: Range<Data> = Range::empty();
        assert!(anchor_at_origin(&range).is_empty());
    }
}
