//! Dish Repository

use super::{RepoError, RepoResult};
use crate::db::id::{max_numeric_id, next_id};
use shared::models::{Dish, DishFields};
use std::collections::HashSet;

/// Dish store: append, lookup and in-place update. Dishes are never deleted.
#[derive(Debug, Default)]
pub struct DishRepository {
    dishes: Vec<Dish>,
}

impl DishRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from seed records, rejecting duplicate ids
    pub fn from_records(dishes: Vec<Dish>) -> RepoResult<Self> {
        let mut seen = HashSet::new();
        for dish in &dishes {
            if !seen.insert(dish.id.as_str()) {
                return Err(RepoError::Duplicate(format!("Dish id {}", dish.id)));
            }
        }
        Ok(Self { dishes })
    }

    pub fn find_all(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Dish> {
        self.dishes.iter().find(|dish| dish.id == id)
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    /// Append a new dish under a freshly generated id
    pub fn create(&mut self, fields: DishFields) -> Dish {
        let id = next_id(max_numeric_id(self.dishes.iter().map(|d| d.id.as_str())));
        let dish = Dish::from_fields(id, fields);
        self.dishes.push(dish.clone());
        tracing::info!(dish_id = %dish.id, "Dish created");
        dish
    }

    /// Merge validated fields into an existing dish
    pub fn update(&mut self, id: &str, fields: DishFields) -> RepoResult<Dish> {
        let dish = self
            .dishes
            .iter_mut()
            .find(|dish| dish.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("Dish does not exist: {id}")))?;
        dish.apply(fields);
        tracing::info!(dish_id = %id, "Dish updated");
        Ok(dish.clone())
    }
}
