//! Data models
//!
//! Shared between the delivery server and its clients (via API).
//! All IDs are decimal strings assigned by the server.

pub mod dish;
pub mod order;

// Re-exports
pub use dish::*;
pub use order::*;
