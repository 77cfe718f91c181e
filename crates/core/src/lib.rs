//! OrderDesk Core - Domain types and pure transforms.
//!
//! This crate holds everything that can be reasoned about without I/O:
//! - [`types`] - The raw WooCommerce order model (strict serde boundary) and
//!   the normalized row/table model used for display and export
//! - [`normalize`] - Conversion of raw orders into the flat table shape
//! - [`summary`] - Cross-order aggregation of line-item quantities
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no HTTP clients,
//! no file formats, no logging. The `server` crate owns all side effects and
//! calls into this crate at its seams.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod normalize;
pub mod summary;
pub mod types;

pub use normalize::{NormalizeError, normalize};
pub use summary::summarize_items;
pub use types::*;
