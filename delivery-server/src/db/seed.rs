//! Seed data loading
//!
//! Dish and order collections are read once at start-up from JSON files,
//! each holding an array of records. Nothing is written back.

use serde::de::DeserializeOwned;
use std::path::Path;

use crate::core::{Result, ServerError};
use crate::db::repository::{DishRepository, OrderRepository};

/// Read a JSON array of records from `path`
pub async fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ServerError::SeedIo {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_str(&raw).map_err(|source| ServerError::SeedParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Dish store from an optional seed file (empty when `None`)
pub async fn load_dishes(path: Option<&Path>) -> Result<DishRepository> {
    let Some(path) = path else {
        return Ok(DishRepository::new());
    };
    let repo = DishRepository::from_records(load_records(path).await?)?;
    tracing::info!(path = %path.display(), count = repo.len(), "Dishes loaded");
    Ok(repo)
}

/// Order store from an optional seed file (empty when `None`)
pub async fn load_orders(path: Option<&Path>) -> Result<OrderRepository> {
    let Some(path) = path else {
        return Ok(OrderRepository::new());
    };
    let repo = OrderRepository::from_records(load_records(path).await?)?;
    tracing::info!(path = %path.display(), count = repo.len(), "Orders loaded");
    Ok(repo)
}
