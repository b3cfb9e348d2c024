#![allow(clippy::needless_return)]

pub mod config;
pub mod error;
pub mod pipeline;
pub mod record;
pub mod row_loader;
pub mod source;
pub mod swift_emitter;
pub mod utils;

// Test utilities - only compiled when testing or with test feature
// #[cfg(test)] alone doesn't work for integration tests (they're external crates)
// The feature flag makes it available to integration tests via dev-dependencies
#[cfg(any(test, feature = "test"))]
pub mod test_utils;

pub use config::{ExportConfig, PurposeRule};
pub use error::ExportError;
pub use pipeline::{ExportRequest, ExportSummary, export_exhibitors};
pub use record::{ExhibitorPurpose, ExhibitorRecord};
pub use row_loader::{EXPECTED_HEADER, load_exhibitors, records_from_rows};
pub use source::{CsvSource, RowsSource, TabularSource, WorkbookSource, source_for_path};
pub use swift_emitter::{SwiftEmitter, escape_quotes};

/// Conventional location of the exhibitor workbook, relative to the app project root
pub const DEFAULT_INPUT_PATH: &str = "Content/HKBU Career Fair 2025 Exhibitor list.xlsx";

/// Conventional location of the generated Swift file, relative to the app project root
pub const DEFAULT_OUTPUT_PATH: &str = "Models/ExhibitorData.swift";
