//! Shared types for the delivery API
//!
//! Wire models and response structures used by the server and by any
//! client talking to it.

pub mod models;
pub mod response;

// Re-exports
pub use models::{Dish, DishFields, Order, OrderFields, OrderLine, OrderStatus};
pub use response::{DataResponse, ErrorResponse};
pub use serde::{Deserialize, Serialize};
