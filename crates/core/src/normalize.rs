//! Conversion of raw WooCommerce orders into the flat table shape.
//!
//! `normalize` is a pure function: same input, byte-identical output, no
//! clock reads. A batch either normalizes completely or fails with the id of
//! the first offending order - a partial table that silently dropped rows
//! would be worse than a visible failure.

use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::{NormalizedOrderRow, RawOrder};

/// Upstream timestamp layout, e.g. `2024-01-02T09:30:00`.
const DATE_CREATED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A raw order that cannot be represented as a table row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// `date_created` or `total` failed to parse. Carries the offending
    /// order id so the operator can inspect the order upstream.
    #[error("order {order_id}: malformed {field}: {value:?}")]
    MalformedOrder {
        /// Upstream id of the order that failed.
        order_id: u64,
        /// Which raw field was unparseable (`date_created` or `total`).
        field: &'static str,
        /// The raw value as received.
        value: String,
    },
}

/// Normalize a batch of raw orders into table rows.
///
/// Rows are sorted by order id ascending before ordinals are assigned - the
/// source may return creation order, which diverges from id order under
/// concurrent order creation. One row per input order, including orders with
/// zero line items (their counts are simply 0).
///
/// # Errors
///
/// Returns [`NormalizeError::MalformedOrder`] if any order's `date_created`
/// or `total` fails to parse. No rows are returned in that case.
pub fn normalize(mut raw: Vec<RawOrder>) -> Result<Vec<NormalizedOrderRow>, NormalizeError> {
    raw.sort_by_key(|o| o.id);

    raw.into_iter()
        .enumerate()
        .map(|(idx, order)| normalize_one(idx + 1, order))
        .collect()
}

fn normalize_one(ordinal: usize, order: RawOrder) -> Result<NormalizedOrderRow, NormalizeError> {
    let date = NaiveDateTime::parse_from_str(&order.date_created, DATE_CREATED_FORMAT)
        .map_err(|_| NormalizeError::MalformedOrder {
            order_id: order.id,
            field: "date_created",
            value: order.date_created.clone(),
        })?
        .date();

    let order_value =
        Decimal::from_str(&order.total).map_err(|_| NormalizeError::MalformedOrder {
            order_id: order.id,
            field: "total",
            value: order.total.clone(),
        })?;

    let customer_name = join_name(
        order.billing.first_name.as_deref(),
        order.billing.last_name.as_deref(),
    );

    let shipping_address = join_address(&[
        order.shipping.address_1.as_deref(),
        order.shipping.address_2.as_deref(),
        order.shipping.city.as_deref(),
        order.shipping.state.as_deref(),
        order.shipping.postcode.as_deref(),
        order.shipping.country.as_deref(),
    ]);

    let items_ordered = order
        .line_items
        .iter()
        .map(|item| format!("{} ({})", item.name, item.quantity))
        .collect::<Vec<_>>()
        .join(", ");

    let total_quantity = order.line_items.iter().map(|item| item.quantity).sum();

    Ok(NormalizedOrderRow {
        ordinal,
        selected: false,
        order_id: order.id,
        date,
        customer_name,
        order_status: order.status,
        order_value,
        item_count: order.line_items.len(),
        total_quantity,
        mobile_number: order.billing.phone.unwrap_or_default(),
        shipping_address,
        items_ordered,
        line_items: order.line_items,
    })
}

/// First and last name joined by one space; empty string if both absent.
fn join_name(first: Option<&str>, last: Option<&str>) -> String {
    let mut name = String::new();
    for part in [first, last].into_iter().flatten() {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if !name.is_empty() {
            name.push(' ');
        }
        name.push_str(part);
    }
    name
}

/// Comma-join the non-empty address fields, skipping absent ones entirely
/// rather than rendering empty tokens.
fn join_address(fields: &[Option<&str>]) -> String {
    fields
        .iter()
        .flatten()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
