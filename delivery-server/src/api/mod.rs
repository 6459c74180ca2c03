//! API 路由模块
//!
//! - [`health`] - 健康检查
//! - [`dishes`] - 菜品接口
//! - [`orders`] - 订单接口
//! - [`payload`] - `{ "data": ... }` 请求体提取器

pub mod payload;

pub mod dishes;
pub mod health;
pub mod orders;

pub use payload::Payload;
