//! Repository Module
//!
//! In-memory stores. Each repository exclusively owns its record
//! collection, kept in insertion order.

pub mod dish;
pub mod order;

pub use dish::DishRepository;
pub use order::OrderRepository;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),
}

pub type RepoResult<T> = Result<T, RepoError>;
