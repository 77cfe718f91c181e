//! XLSX workbook generation for a selection of order rows.
//!
//! Two sheets: "Orders" projects the table columns under their export-facing
//! names, "Item Summary" aggregates line-item quantities across the selected
//! orders. The projection renames columns in the workbook only; the rows
//! passed in are never mutated.

use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook, Worksheet};

use orderdesk_core::{NormalizedOrderRow, summarize_items};

use super::ExportError;

const ORDERS_SHEET: &str = "Orders";
const SUMMARY_SHEET: &str = "Item Summary";

/// Export-facing column names, in sheet order.
const ORDERS_HEADERS: [&str; 7] = [
    "Order No",
    "Name",
    "Items Ordered",
    "Mobile Number",
    "Shipping Address",
    "Order Total",
    "Order Status",
];
const SUMMARY_HEADERS: [&str; 2] = ["Item Name", "Total Quantity"];

/// Uniform column width for both sheets.
const COLUMN_WIDTH: f64 = 24.0;
/// Uniform data-row height.
const ROW_HEIGHT: f64 = 18.0;

/// Build the complete workbook for the given selection.
///
/// Rows are written in the order given, which the session keeps in ordinal
/// (ascending order id) order; no re-sorting happens here.
///
/// # Errors
///
/// [`ExportError::EmptySelection`] if the selection is empty;
/// [`ExportError::Workbook`] if serialization fails. No bytes are produced
/// on error.
pub fn build_workbook(selection: &[NormalizedOrderRow]) -> Result<Vec<u8>, ExportError> {
    if selection.is_empty() {
        return Err(ExportError::EmptySelection);
    }

    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    write_orders_sheet(workbook.add_worksheet(), selection, &bold)?;
    write_summary_sheet(workbook.add_worksheet(), selection, &bold)?;

    Ok(workbook.save_to_buffer()?)
}

fn write_orders_sheet(
    sheet: &mut Worksheet,
    selection: &[NormalizedOrderRow],
    bold: &Format,
) -> Result<(), ExportError> {
    sheet.set_name(ORDERS_SHEET)?;
    write_header_row(sheet, &ORDERS_HEADERS, bold)?;

    let mut row_idx: u32 = 1;
    for row in selection {
        sheet.set_row_height(row_idx, ROW_HEIGHT)?;
        // Order ids sit far below 2^53; the f64 cast is exact.
        sheet.write_number(row_idx, 0, row.order_id as f64)?;
        sheet.write_string(row_idx, 1, &row.customer_name)?;
        sheet.write_string(row_idx, 2, &row.items_ordered)?;
        sheet.write_string(row_idx, 3, &row.mobile_number)?;
        sheet.write_string(row_idx, 4, &row.shipping_address)?;
        let order_total = row.order_value.to_f64().ok_or_else(|| {
            ExportError::Numeric(format!("order {}: total {}", row.order_id, row.order_value))
        })?;
        sheet.write_number(row_idx, 5, order_total)?;
        sheet.write_string(row_idx, 6, &row.order_status)?;
        row_idx += 1;
    }

    Ok(())
}

fn write_summary_sheet(
    sheet: &mut Worksheet,
    selection: &[NormalizedOrderRow],
    bold: &Format,
) -> Result<(), ExportError> {
    sheet.set_name(SUMMARY_SHEET)?;
    write_header_row(sheet, &SUMMARY_HEADERS, bold)?;

    let mut row_idx: u32 = 1;
    for entry in summarize_items(selection) {
        sheet.set_row_height(row_idx, ROW_HEIGHT)?;
        sheet.write_string(row_idx, 0, &entry.item_name)?;
        sheet.write_number(row_idx, 1, entry.total_quantity as f64)?;
        row_idx += 1;
    }

    Ok(())
}

fn write_header_row(
    sheet: &mut Worksheet,
    headers: &[&str],
    bold: &Format,
) -> Result<(), ExportError> {
    let mut col: u16 = 0;
    for header in headers {
        sheet.write_string_with_format(0, col, *header, bold)?;
        sheet.set_column_width(col, COLUMN_WIDTH)?;
        col += 1;
    }
    Ok(())
}
