//! Export error model.

use thiserror::Error;

/// Failure while building or serializing the workbook.
///
/// Serialization problems must surface here explicitly; the export path
/// never hands back a partially written buffer as success.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The underlying workbook writer rejected an operation or could not
    /// serialize the document.
    #[error("workbook serialization failed: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}
