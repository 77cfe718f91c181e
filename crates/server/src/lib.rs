//! OrderDesk server library.
//!
//! Exposes the service as a library so routes and clients can be exercised
//! from tests without a running binary.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod export;
pub mod routes;
pub mod session;
pub mod state;
pub mod woo;
