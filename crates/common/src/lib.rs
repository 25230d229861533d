//! Shared pieces used by the server crate and the binary: wire types that are not
//! tied to a table, and tracing setup.

pub mod types;
pub mod utils;
