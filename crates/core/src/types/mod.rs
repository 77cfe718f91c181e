//! Core types for OrderDesk.
//!
//! Raw upstream order records live in [`raw`]; the flattened table model the
//! rest of the system works with lives in [`row`].

pub mod raw;
pub mod row;

pub use raw::{BillingInfo, LineItem, RawOrder, ShippingInfo};
pub use row::{ItemSummaryEntry, NormalizedOrderRow, OrderTable};
