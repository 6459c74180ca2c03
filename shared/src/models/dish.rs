//! Dish Model

use serde::{Deserialize, Serialize};

/// Dish entity (菜品)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in the smallest currency unit, never negative
    pub price: u64,
    pub image_url: String,
}

/// Validated dish fields (create / update payload)
///
/// The allow-list of fields a request may write into a stored dish.
/// `id` is deliberately absent: it is assigned on create and immutable after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishFields {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

impl Dish {
    /// Build a new dish record from validated fields
    pub fn from_fields(id: String, fields: DishFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            image_url: fields.image_url,
        }
    }

    /// Merge validated fields in place, keeping the id
    pub fn apply(&mut self, fields: DishFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.image_url = fields.image_url;
    }
}
