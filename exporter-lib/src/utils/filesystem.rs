use std::fs;
use std::path::Path;

use tracing::info;

use crate::ExportError;

/// Write the generated source to `path` in a single call.
///
/// The parent directory must already exist; a missing directory is reported as an I/O error.
pub fn write_output(path: &Path, contents: &str) -> Result<(), ExportError> {
    fs::write(path, contents).map_err(|source| ExportError::io(path, source))?;
    info!(path = %path.display(), bytes = contents.len(), "wrote generated source");
    Ok(())
}
