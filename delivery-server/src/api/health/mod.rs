//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 健康检查 + 记录数 |
//!
//! ```json
//! { "status": "ok", "version": "0.1.0", "environment": "development", "dishes": 3, "orders": 1 }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    /// 运行环境 (ENVIRONMENT)
    environment: String,
    /// 菜品数量
    dishes: usize,
    /// 订单数量
    orders: usize,
}

async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        dishes: state.dishes.read().len(),
        orders: state.orders.read().len(),
    })
}
