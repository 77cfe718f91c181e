//! Normalized, table-shaped order rows and the per-fetch table that owns them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::raw::LineItem;

/// One flattened order, derived from a [`super::RawOrder`].
///
/// Immutable after normalization except for `selected`, which only the
/// session layer flips. Column renames for export (e.g. `order_id` shown as
/// "Order No") are applied as a projection at export time and never mutate
/// this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedOrderRow {
    /// 1-based position after sorting by `order_id` ascending. Display
    /// convenience only; not stable across fetches.
    pub ordinal: usize,
    /// Whether the operator has marked this row for export.
    pub selected: bool,
    /// Upstream order id. Unique within one fetch.
    pub order_id: u64,
    /// Calendar day the order was created.
    pub date: NaiveDate,
    /// Billing first and last name joined by a single space, trimmed.
    pub customer_name: String,
    /// Opaque upstream status string.
    pub order_status: String,
    /// Order total. Exact decimal, never floating point.
    #[serde(with = "rust_decimal::serde::str")]
    pub order_value: Decimal,
    /// Number of distinct line items (SKUs).
    pub item_count: usize,
    /// Sum of line-item quantities (units). Not the same metric as
    /// `item_count`.
    pub total_quantity: u64,
    /// Billing phone, empty if absent.
    pub mobile_number: String,
    /// Comma-joined non-empty shipping fields in fixed field order.
    pub shipping_address: String,
    /// Comma-joined `"name (quantity)"` per line item, source order.
    pub items_ordered: String,
    /// Verbatim line items, kept for export-time aggregation. Not part of
    /// the primary table view.
    #[serde(skip_serializing, default)]
    pub line_items: Vec<LineItem>,
}

/// The full normalized table for one fetch, plus the range that produced it.
///
/// Lifecycle: created on a successful fetch, replaced wholesale by the next
/// fetch, dropped on session end. Never merged across fetches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderTable {
    /// Inclusive start of the fetched calendar-day range.
    pub start_date: NaiveDate,
    /// Inclusive end of the fetched calendar-day range.
    pub end_date: NaiveDate,
    /// Rows in ordinal order.
    pub rows: Vec<NormalizedOrderRow>,
}

impl OrderTable {
    /// Build a table from normalized rows.
    #[must_use]
    pub const fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        rows: Vec<NormalizedOrderRow>,
    ) -> Self {
        Self {
            start_date,
            end_date,
            rows,
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the fetch produced no orders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Flip the selection flag on one row. Returns false if no row has the
    /// given order id.
    pub fn set_selected(&mut self, order_id: u64, selected: bool) -> bool {
        match self.rows.iter_mut().find(|r| r.order_id == order_id) {
            Some(row) => {
                row.selected = selected;
                true
            }
            None => false,
        }
    }

    /// Set the selection flag on every row.
    pub fn set_all_selected(&mut self, selected: bool) {
        for row in &mut self.rows {
            row.selected = selected;
        }
    }

    /// Clone out the selected rows, in ordinal order. Read-only view; never
    /// mutates the table.
    #[must_use]
    pub fn selection(&self) -> Vec<NormalizedOrderRow> {
        self.rows.iter().filter(|r| r.selected).cloned().collect()
    }
}

/// One row of the export-time "Item Summary" sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSummaryEntry {
    /// Product name, exact match key across selected orders.
    pub item_name: String,
    /// Units of this product across every selected order's line items.
    pub total_quantity: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn row(order_id: u64, ordinal: usize) -> NormalizedOrderRow {
        NormalizedOrderRow {
            ordinal,
            selected: false,
            order_id,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            customer_name: String::new(),
            order_status: "processing".to_string(),
            order_value: Decimal::ZERO,
            item_count: 0,
            total_quantity: 0,
            mobile_number: String::new(),
            shipping_address: String::new(),
            items_ordered: String::new(),
            line_items: Vec::new(),
        }
    }

    fn table(rows: Vec<NormalizedOrderRow>) -> OrderTable {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
        OrderTable::new(day, day, rows)
    }

    #[test]
    fn test_set_selected_known_and_unknown_id() {
        let mut t = table(vec![row(2, 1), row(5, 2)]);
        assert!(t.set_selected(5, true));
        assert!(!t.rows[0].selected);
        assert!(t.rows[1].selected);
        assert!(!t.set_selected(99, true));
    }

    #[test]
    fn test_selection_preserves_ordinal_order() {
        let mut t = table(vec![row(2, 1), row(5, 2), row(9, 3)]);
        t.set_all_selected(true);
        t.set_selected(5, false);
        let sel = t.selection();
        let ids: Vec<u64> = sel.iter().map(|r| r.order_id).collect();
        assert_eq!(ids, vec![2, 9]);
    }

    #[test]
    fn test_selection_does_not_mutate_table() {
        let mut t = table(vec![row(2, 1)]);
        t.set_all_selected(true);
        let before = t.clone();
        let _sel = t.selection();
        assert_eq!(t, before);
    }

    #[test]
    fn test_row_serialization_omits_line_items() {
        let mut r = row(3, 1);
        r.line_items.push(LineItem {
            name: "Widget".to_string(),
            quantity: 2,
            price: "5.00".to_string(),
            total: "10.00".to_string(),
        });
        let json = serde_json::to_value(&r).expect("serializable row");
        assert!(json.get("line_items").is_none());
        assert_eq!(json["order_id"], 3);
        assert_eq!(json["order_value"], "0");
    }
}
