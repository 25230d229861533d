//! Service layer: one function per storefront operation, on top of `models`.
//! - Every write is a single auto-committed statement.
//! - Request fields are optional; absent values go to the database as NULL and the
//!   schema decides whether that is acceptable.

pub mod errors;
pub mod settings_service;
pub mod catalog_service;
pub mod order_service;
#[cfg(test)]
pub mod test_support;
