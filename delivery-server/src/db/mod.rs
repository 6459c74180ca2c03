//! 数据层 - 内存存储
//!
//! - [`id`] - ID 生成
//! - [`repository`] - 菜品 / 订单存储
//! - [`seed`] - 启动时加载种子数据

pub mod id;
pub mod repository;
pub mod seed;

pub use repository::{DishRepository, OrderRepository, RepoError, RepoResult};
