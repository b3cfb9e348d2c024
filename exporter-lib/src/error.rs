use std::path::PathBuf;
use thiserror::Error;

/// Every failure the export pipeline can report. All of them are fatal: the
/// pipeline never writes a partial output file.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading workbook {}: {source}", path.display())]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Workbook {} does not contain any sheet", path.display())]
    MissingSheet { path: PathBuf },

    #[error("Error reading CSV file {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Unexpected header: expected {expected:?} in columns 2 to 5, got {actual:?}")]
    Schema {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("Cannot convert {column} at row {row} to {expected}: \"{value}\"")]
    Coercion {
        row: usize,
        column: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Duplicate exhibitor index {index} at rows {first_row} and {row}")]
    DuplicateIndex {
        index: u32,
        first_row: usize,
        row: usize,
    },

    #[error("Error parsing config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            source,
        }
    }
}
