use rust_xlsxwriter::{Color, Format, Workbook};

use stocksheet_catalog::Product;

use crate::error::ExportError;

/// Fixed column labels, in output order.
pub const HEADERS: [&str; 6] = ["id", "category", "name", "quantity", "price", "total cost"];

/// Name of the single worksheet.
pub const SHEET_NAME: &str = "Product";

/// Serialize the given products into an XLSX document.
///
/// Row 0 is the header row (bold, red font); each product becomes one data
/// row in input order, with `total cost` computed fresh from quantity and
/// price. An empty input yields a valid document with only the header row.
///
/// Returns the finished byte buffer, or an [`ExportError`] if any write or
/// the final serialization fails.
pub fn generate_workbook(products: &[Product]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold().set_font_color(Color::Red);
    for (col, label) in HEADERS.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *label, &header_format)?;
    }

    for (index, product) in products.iter().enumerate() {
        let row = (index + 1) as u32;
        worksheet.write(row, 0, product.id)?;
        worksheet.write(row, 1, product.category.as_str())?;
        worksheet.write(row, 2, product.name.as_str())?;
        worksheet.write(row, 3, product.quantity)?;
        worksheet.write(row, 4, product.price)?;
        worksheet.write(row, 5, product.total_cost())?;
    }

    let buffer = workbook.save_to_buffer()?;
    tracing::debug!(rows = products.len(), bytes = buffer.len(), "workbook serialized");
    Ok(buffer)
}
