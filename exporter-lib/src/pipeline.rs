use std::path::PathBuf;
use tracing::info;

use crate::row_loader::load_exhibitors;
use crate::source::source_for_path;
use crate::swift_emitter::SwiftEmitter;
use crate::utils::write_output;
use crate::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, ExportConfig, ExportError};

/// Where to read exhibitors from and where to write the Swift file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Sheet to read; the first sheet when `None`. Ignored for CSV input.
    pub sheet_name: Option<String>,
}

impl Default for ExportRequest {
    fn default() -> Self {
        ExportRequest {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            sheet_name: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Number of exhibitors written
    pub records: usize,
    pub output: PathBuf,
}

/// Load, render and write in that order.
///
/// The output file is only touched once every row has been loaded and the
/// whole file rendered, so a failing run leaves any previous output in place.
pub fn export_exhibitors(
    request: &ExportRequest,
    config: &ExportConfig,
) -> Result<ExportSummary, ExportError> {
    config.validate()?;

    let mut source = source_for_path(&request.input, request.sheet_name.as_deref());
    let records = load_exhibitors(source.as_mut())?;

    let swift_source = SwiftEmitter::new(config).render(&records);
    write_output(&request.output, &swift_source)?;

    info!(
        input = %request.input.display(),
        output = %request.output.display(),
        records = records.len(),
        "export finished"
    );

    Ok(ExportSummary {
        records: records.len(),
        output: request.output.clone(),
    })
}
