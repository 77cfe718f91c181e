//! Export artifact builders.
//!
//! Both builders take the caller's read-only selection of normalized rows and
//! return a complete in-memory byte stream. They never touch persistent
//! storage - handing bytes to a download mechanism is the presentation
//! layer's job - and they fail atomically: on error no bytes are returned.

mod pdf;
mod workbook;

pub use pdf::build_pdf;
pub use workbook::build_workbook;

use thiserror::Error;

/// XLSX MIME type for download responses.
pub const XLSX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// PDF MIME type for download responses.
pub const PDF_MIME: &str = "application/pdf";

/// Errors that can occur while building an export artifact.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The caller selected no rows. The UI should prevent this; the builders
    /// still enforce it.
    #[error("no rows selected")]
    EmptySelection,

    /// Workbook serialization failed.
    #[error("workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    /// A numeric cell value could not be represented in the workbook.
    /// Failing beats writing a default indistinguishable from a real zero.
    #[error("unrepresentable numeric value: {0}")]
    Numeric(String),

    /// PDF generation failed.
    #[error("pdf error: {0}")]
    Pdf(String),
}
