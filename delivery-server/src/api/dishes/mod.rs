//! Dish API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /dishes | GET / POST | 列表 / 创建 |
//! | /dishes/{dish_id} | GET / PUT | 读取 / 更新 |

mod handler;
pub mod validators;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/dishes", get(handler::list).post(handler::create))
        .route("/dishes/{dish_id}", get(handler::read).put(handler::update))
}
