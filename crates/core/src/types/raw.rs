//! Raw order records as returned by the WooCommerce REST API.
//!
//! Deserialization is the single place where untyped upstream JSON becomes
//! typed data. Optionality is declared here, once: absent billing/shipping
//! fields become `None`, never sentinel strings. Fields the pipeline does not
//! consume are ignored by serde.
//!
//! `date_created` and `total` are kept as strings at this boundary so that a
//! malformed value can be reported against its order id during normalization
//! instead of failing the whole response deserialization anonymously.

use serde::{Deserialize, Serialize};

/// One order as returned by `GET /orders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawOrder {
    /// Source-assigned order id, unique per store.
    pub id: u64,
    /// ISO-8601 local timestamp, e.g. `2024-01-02T09:30:00`. No timezone.
    pub date_created: String,
    /// Source-defined status string (`processing`, `cancelled`, ...).
    /// Treated as opaque.
    pub status: String,
    /// Order total as a decimal string, e.g. `"100.00"`.
    pub total: String,
    /// Billing contact details.
    #[serde(default)]
    pub billing: BillingInfo,
    /// Shipping destination.
    #[serde(default)]
    pub shipping: ShippingInfo,
    /// Products on the order, in source order.
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

/// Billing block of a raw order. All fields optional upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingInfo {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

/// Shipping block of a raw order. All fields optional upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingInfo {
    pub address_1: Option<String>,
    pub address_2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
}

/// One product entry within an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name as sold. Grouping in the item summary is an exact match
    /// on this string.
    pub name: String,
    /// Units ordered.
    pub quantity: u64,
    /// Unit price as a decimal string.
    pub price: String,
    /// Line total as a decimal string.
    pub total: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_order() {
        let json = r#"{
            "id": 42,
            "date_created": "2024-01-02T09:30:00",
            "status": "processing",
            "total": "100.00",
            "billing": {"first_name": "Ada", "last_name": "Lovelace", "phone": "555-0100"},
            "shipping": {"address_1": "1 Main St", "city": "Springfield", "state": "IL", "postcode": "62704", "country": "US"},
            "line_items": [{"name": "Widget", "quantity": 3, "price": "10.00", "total": "30.00"}],
            "currency": "USD",
            "customer_note": "ignored field"
        }"#;

        let order: RawOrder = serde_json::from_str(json).expect("valid order");
        assert_eq!(order.id, 42);
        assert_eq!(order.billing.first_name.as_deref(), Some("Ada"));
        assert_eq!(order.shipping.address_2, None);
        assert_eq!(order.line_items.len(), 1);
        assert_eq!(order.line_items[0].quantity, 3);
    }

    #[test]
    fn test_deserialize_missing_optional_blocks() {
        let json = r#"{
            "id": 7,
            "date_created": "2024-03-01T00:00:00",
            "status": "pending",
            "total": "0.00"
        }"#;

        let order: RawOrder = serde_json::from_str(json).expect("valid order");
        assert_eq!(order.billing, BillingInfo::default());
        assert_eq!(order.shipping, ShippingInfo::default());
        assert!(order.line_items.is_empty());
    }
}
