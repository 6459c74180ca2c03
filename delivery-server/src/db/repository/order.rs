//! Order Repository

use super::{RepoError, RepoResult};
use crate::db::id::{max_numeric_id, next_id};
use shared::models::{Order, OrderFields};
use std::collections::HashSet;

/// Order store: append, lookup, in-place update and removal
#[derive(Debug, Default)]
pub struct OrderRepository {
    orders: Vec<Order>,
}

impl OrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from seed records, rejecting duplicate ids
    pub fn from_records(orders: Vec<Order>) -> RepoResult<Self> {
        let mut seen = HashSet::new();
        for order in &orders {
            if !seen.insert(order.id.as_str()) {
                return Err(RepoError::Duplicate(format!("Order id {}", order.id)));
            }
        }
        Ok(Self { orders })
    }

    pub fn find_all(&self) -> &[Order] {
        &self.orders
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Append a new order under a freshly generated id
    pub fn create(&mut self, fields: OrderFields) -> Order {
        let id = next_id(max_numeric_id(self.orders.iter().map(|o| o.id.as_str())));
        let order = Order::from_fields(id, fields);
        self.orders.push(order.clone());
        tracing::info!(order_id = %order.id, status = %order.status, "Order created");
        order
    }

    /// Merge validated fields into an existing order
    pub fn update(&mut self, id: &str, fields: OrderFields) -> RepoResult<Order> {
        let order = self
            .orders
            .iter_mut()
            .find(|order| order.id == id)
            .ok_or_else(|| not_found(id))?;
        order.apply(fields);
        tracing::info!(order_id = %id, status = %order.status, "Order updated");
        Ok(order.clone())
    }

    /// Remove an order, returning it
    pub fn delete(&mut self, id: &str) -> RepoResult<Order> {
        let index = self
            .orders
            .iter()
            .position(|order| order.id == id)
            .ok_or_else(|| not_found(id))?;
        let order = self.orders.remove(index);
        tracing::info!(order_id = %id, "Order deleted");
        Ok(order)
    }
}

fn not_found(id: &str) -> RepoError {
    RepoError::NotFound(format!("Order does not exist: {id}"))
}
