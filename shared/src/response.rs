//! API Response types
//!
//! Every successful response wraps its payload in a `data` envelope:
//! ```json
//! { "data": { ... } }
//! ```
//! Request bodies use the same envelope.

use serde::{Deserialize, Serialize};

/// `{ "data": ... }` envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Error response body
///
/// ```json
/// { "code": "E0006", "error": "Dish must include a name" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code (E0003 not found, E0006 invalid request, ...)
    pub code: String,
    /// Human-readable message, reported verbatim to the caller
    pub error: String,
}
