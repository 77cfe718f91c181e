//! PDF generation: one A4 page per selected order.
//!
//! Each page carries four fixed-position text lines (order id, customer
//! name, date, total) in the built-in Courier-Bold face, with a horizontal
//! rule underneath. Intentionally dumb templating; the workbook is the
//! structured artifact.

use printpdf::{BuiltinFont, Line, Mm, PdfDocument, Point};

use orderdesk_core::NormalizedOrderRow;

use super::ExportError;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 18.0;
const FONT_SIZE: f32 = 12.0;
const LINE_SPACING_MM: f32 = 7.0;

/// Build a PDF with one page per selected order.
///
/// # Errors
///
/// [`ExportError::EmptySelection`] if the selection is empty;
/// [`ExportError::Pdf`] if document generation fails.
pub fn build_pdf(selection: &[NormalizedOrderRow]) -> Result<Vec<u8>, ExportError> {
    if selection.is_empty() {
        return Err(ExportError::EmptySelection);
    }

    let (doc, first_page, first_layer) = PdfDocument::new(
        "Orders",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::CourierBold)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    for (idx, row) in selection.iter().enumerate() {
        let (page, layer) = if idx == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1")
        };
        let layer = doc.get_page(page).get_layer(layer);

        let fields = [
            format!("Order ID: {}", row.order_id),
            format!("Customer Name: {}", row.customer_name),
            format!("Date: {}", row.date),
            format!("Order Total: {}", row.order_value),
        ];

        let mut y = PAGE_HEIGHT_MM - MARGIN_MM;
        for field in &fields {
            layer.use_text(field.clone(), FONT_SIZE, Mm(MARGIN_MM), Mm(y), &font);
            y -= LINE_SPACING_MM;
        }

        let rule = Line {
            points: vec![
                (Point::new(Mm(MARGIN_MM), Mm(y)), false),
                (Point::new(Mm(PAGE_WIDTH_MM - MARGIN_MM), Mm(y)), false),
            ],
            is_closed: false,
        };
        layer.add_line(rule);
    }

    doc.save_to_bytes().map_err(|e| ExportError::Pdf(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn row(order_id: u64) -> NormalizedOrderRow {
        NormalizedOrderRow {
            ordinal: 1,
            selected: true,
            order_id,
            date: NaiveDate::from_ymd_opt(2024, 1, 2).expect("valid date"),
            customer_name: "Ada Lovelace".to_string(),
            order_status: "processing".to_string(),
            order_value: Decimal::new(10000, 2),
            item_count: 0,
            total_quantity: 0,
            mobile_number: String::new(),
            shipping_address: String::new(),
            items_ordered: String::new(),
            line_items: Vec::new(),
        }
    }

    #[test]
    fn test_empty_selection_produces_no_bytes() {
        let err = build_pdf(&[]).expect_err("empty selection must fail");
        assert!(matches!(err, ExportError::EmptySelection));
    }

    #[test]
    fn test_pdf_header_magic() {
        let bytes = build_pdf(&[row(2), row(5)]).expect("pdf builds");
        assert_eq!(bytes.get(..5), Some(&b"%PDF-"[..]));
    }
}
