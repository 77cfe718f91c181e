//! Session-scoped order table state.
//!
//! One interactive session owns at most one [`OrderTable`]. The table is
//! created on a successful fetch, replaced wholesale by the next fetch, and
//! dropped when the session ends. Selection flags are the only mutation the
//! session applies; tables are never merged across fetches.

use std::sync::Arc;

use tokio::sync::RwLock;

use orderdesk_core::{NormalizedOrderRow, OrderTable};

/// Outcome of a selection update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The flag was applied.
    Updated,
    /// No table has been fetched yet.
    NoTable,
    /// The table exists but has no row with the given order id.
    UnknownOrder,
}

/// Holds the current fetch's table for one interactive session.
///
/// Single-writer, single-reader in practice; the `RwLock` makes handler
/// access safe regardless.
#[derive(Clone, Default)]
pub struct Session {
    table: Arc<RwLock<Option<OrderTable>>>,
}

impl Session {
    /// Create an empty session with no table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the table from a successful fetch, superseding any previous
    /// one.
    pub async fn replace(&self, table: OrderTable) {
        *self.table.write().await = Some(table);
    }

    /// Drop the current table, if any.
    pub async fn clear(&self) {
        *self.table.write().await = None;
    }

    /// Clone out the current table, if one has been fetched.
    pub async fn table(&self) -> Option<OrderTable> {
        self.table.read().await.clone()
    }

    /// Flip the selection flag on one row.
    pub async fn set_selected(&self, order_id: u64, selected: bool) -> SelectOutcome {
        match self.table.write().await.as_mut() {
            None => SelectOutcome::NoTable,
            Some(table) => {
                if table.set_selected(order_id, selected) {
                    SelectOutcome::Updated
                } else {
                    SelectOutcome::UnknownOrder
                }
            }
        }
    }

    /// Set the selection flag on every row. Returns false if no table exists.
    pub async fn set_all_selected(&self, selected: bool) -> bool {
        match self.table.write().await.as_mut() {
            None => false,
            Some(table) => {
                table.set_all_selected(selected);
                true
            }
        }
    }

    /// Read-only view of the currently selected rows, in ordinal order.
    /// `None` if no table has been fetched yet.
    pub async fn selection(&self) -> Option<Vec<NormalizedOrderRow>> {
        self.table.read().await.as_ref().map(OrderTable::selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
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

    fn table(ids: &[u64]) -> OrderTable {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
        let rows = ids
            .iter()
            .enumerate()
            .map(|(i, id)| row(*id, i + 1))
            .collect();
        OrderTable::new(day, day, rows)
    }

    #[tokio::test]
    async fn test_empty_session_has_no_table_or_selection() {
        let session = Session::new();
        assert!(session.table().await.is_none());
        assert!(session.selection().await.is_none());
        assert_eq!(session.set_selected(1, true).await, SelectOutcome::NoTable);
        assert!(!session.set_all_selected(true).await);
    }

    #[tokio::test]
    async fn test_replace_supersedes_previous_table() {
        let session = Session::new();
        session.replace(table(&[1, 2])).await;
        session.set_all_selected(true).await;

        // A new fetch replaces the table; old selection does not leak in.
        session.replace(table(&[3])).await;
        let current = session.table().await.expect("table present");
        assert_eq!(current.len(), 1);
        assert_eq!(current.rows[0].order_id, 3);
        assert!(!current.rows[0].selected);
    }

    #[tokio::test]
    async fn test_selection_flow() {
        let session = Session::new();
        session.replace(table(&[2, 5, 9])).await;

        assert_eq!(session.set_selected(5, true).await, SelectOutcome::Updated);
        assert_eq!(
            session.set_selected(404, true).await,
            SelectOutcome::UnknownOrder
        );

        let selection = session.selection().await.expect("table present");
        assert_eq!(selection.len(), 1);
        assert_eq!(selection[0].order_id, 5);
    }

    #[tokio::test]
    async fn test_clear_drops_table() {
        let session = Session::new();
        session.replace(table(&[1])).await;
        session.clear().await;
        assert!(session.table().await.is_none());
    }
}
