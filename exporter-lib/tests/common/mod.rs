use exporter_lib::source::SourceRow;
use exporter_lib::{ExportConfig, ExportRequest};
use std::path::{Path, PathBuf};

// Re-export shared test utilities from src/test_utils.rs
// These are the core functions used by most tests
pub use exporter_lib::test_utils::{data_row, header_row, record, rows_to_csv, text};

/// Header plus the three exhibitors used across the tests, one of them without booth
#[allow(dead_code)]
pub fn sample_rows() -> Vec<SourceRow> {
    vec![
        header_row(),
        data_row(1, "Acme Ltd", "Banking & Finance", "18 Feb (Day 1)", Some(12)),
        data_row(2, "Globex Corporation", "Engineering", "19 Feb (Day 2)", None),
        data_row(3, "Initech", "IT", "20 Feb (Day 3)", Some(40)),
    ]
}

/// Write `rows` as a CSV file inside `dir` and return its path
#[allow(dead_code)]
pub fn write_csv(dir: &Path, rows: &[SourceRow]) -> PathBuf {
    let path = dir.join("exhibitors.csv");
    std::fs::write(&path, rows_to_csv(rows)).unwrap();
    path
}

/// Request reading `input` and writing `ExhibitorData.swift` next to it
#[allow(dead_code)]
pub fn request_for(dir: &Path, input: PathBuf) -> ExportRequest {
    ExportRequest {
        input,
        output: dir.join("ExhibitorData.swift"),
        sheet_name: None,
    }
}

#[allow(dead_code)]
pub fn default_config() -> ExportConfig {
    ExportConfig::default()
}

/// Path of a checked-in spreadsheet under `tests/fixtures`
#[allow(dead_code)]
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
