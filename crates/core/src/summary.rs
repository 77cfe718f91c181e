//! Export-time aggregation of line-item quantities across selected orders.

use std::collections::BTreeMap;

use crate::types::{ItemSummaryEntry, NormalizedOrderRow};

/// Flatten every line item across the given rows into `(name, quantity)`
/// pairs, group by exact product name, and sum quantities per group.
///
/// Grouping is case-sensitive - near-duplicate names are intentionally not
/// merged. Output is sorted by item name ascending. Summation is integer
/// arithmetic, so the conservation invariant is exact: the summary total
/// always equals the sum of quantities across the rows' line items.
#[must_use]
pub fn summarize_items(rows: &[NormalizedOrderRow]) -> Vec<ItemSummaryEntry> {
    let mut totals: BTreeMap<&str, u64> = BTreeMap::new();
    for row in rows {
        for item in &row.line_items {
            *totals.entry(item.name.as_str()).or_insert(0) += item.quantity;
        }
    }

    totals
        .into_iter()
        .map(|(item_name, total_quantity)| ItemSummaryEntry {
            item_name: item_name.to_string(),
            total_quantity,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LineItem;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn row_with_items(order_id: u64, items: Vec<(&str, u64)>) -> NormalizedOrderRow {
        let line_items: Vec<LineItem> = items
            .into_iter()
            .map(|(name, quantity)| LineItem {
                name: name.to_string(),
                quantity,
                price: "1.00".to_string(),
                total: quantity.to_string(),
            })
            .collect();

        NormalizedOrderRow {
            ordinal: 1,
            selected: true,
            order_id,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            customer_name: String::new(),
            order_status: "processing".to_string(),
            order_value: Decimal::ZERO,
            item_count: line_items.len(),
            total_quantity: line_items.iter().map(|i| i.quantity).sum(),
            mobile_number: String::new(),
            shipping_address: String::new(),
            items_ordered: String::new(),
            line_items,
        }
    }

    #[test]
    fn test_sums_quantities_across_orders_by_exact_name() {
        let rows = vec![
            row_with_items(2, vec![("Widget", 1), ("Gadget", 2)]),
            row_with_items(5, vec![("Widget", 3)]),
        ];

        let summary = summarize_items(&rows);
        assert_eq!(
            summary,
            vec![
                ItemSummaryEntry {
                    item_name: "Gadget".to_string(),
                    total_quantity: 2,
                },
                ItemSummaryEntry {
                    item_name: "Widget".to_string(),
                    total_quantity: 4,
                },
            ]
        );
    }

    #[test]
    fn test_case_sensitive_grouping() {
        let rows = vec![row_with_items(1, vec![("widget", 1), ("Widget", 2)])];

        let summary = summarize_items(&rows);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].item_name, "Widget");
        assert_eq!(summary[1].item_name, "widget");
    }

    #[test]
    fn test_conservation_invariant() {
        let rows = vec![
            row_with_items(1, vec![("A", 4), ("B", 7)]),
            row_with_items(2, vec![("B", 1), ("C", 9), ("A", 2)]),
            row_with_items(3, vec![]),
        ];

        let input_units: u64 = rows
            .iter()
            .flat_map(|r| r.line_items.iter())
            .map(|i| i.quantity)
            .sum();
        let summary_units: u64 = summarize_items(&rows).iter().map(|e| e.total_quantity).sum();
        assert_eq!(input_units, summary_units);
        assert_eq!(summary_units, 23);
    }

    #[test]
    fn test_empty_rows_produce_empty_summary() {
        assert!(summarize_items(&[]).is_empty());
    }
}
