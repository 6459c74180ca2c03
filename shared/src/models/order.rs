//! Order Model
//!
//! Orders embed references to dishes through [`OrderLine`]. Field names on the
//! wire are camelCase (`deliverTo`, `mobileNumber`, `dishId`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Order status lifecycle
///
/// Any status may move to any other through an update. Only `Pending`
/// orders can be deleted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    /// All statuses, in lifecycle order
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// Whether an order in this status may be deleted
    pub fn is_deletable(&self) -> bool {
        matches!(self, OrderStatus::Pending)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown status string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// One line of an order: a dish reference and a quantity
///
/// Everything but `quantity` is caller data and is kept as-is in `details`,
/// including the `dishId` reference (any JSON type) and any embedded dish
/// snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Always > 0
    pub quantity: u32,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl OrderLine {
    /// The referenced dish, exactly as supplied
    pub fn dish_id(&self) -> Option<&Value> {
        self.details.get("dishId")
    }
}

/// Order entity (外卖订单)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<OrderLine>,
    #[serde(default)]
    pub status: OrderStatus,
}

/// Validated order fields (create / update payload)
///
/// The allow-list of fields a request may write into a stored order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFields {
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<OrderLine>,
    pub status: OrderStatus,
}

impl Order {
    /// Build a new order record from validated fields
    pub fn from_fields(id: String, fields: OrderFields) -> Self {
        Self {
            id,
            deliver_to: fields.deliver_to,
            mobile_number: fields.mobile_number,
            dishes: fields.dishes,
            status: fields.status,
        }
    }

    /// Merge validated fields in place, keeping the id
    pub fn apply(&mut self, fields: OrderFields) {
        self.deliver_to = fields.deliver_to;
        self.mobile_number = fields.mobile_number;
        self.dishes = fields.dishes;
        self.status = fields.status;
    }
}
