//! `stocksheet-export` — XLSX serialization of the product catalog.
//!
//! Turns an ordered slice of [`Product`](stocksheet_catalog::Product)
//! records into a single-sheet workbook: one styled header row, one data
//! row per product, and a derived total-cost column.

pub mod error;
pub mod workbook;

pub use error::ExportError;
pub use workbook::{generate_workbook, HEADERS, SHEET_NAME};
