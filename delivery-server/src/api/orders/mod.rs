//! Order API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /orders | GET / POST | 列表 / 创建 |
//! | /orders/{order_id} | GET / PUT / DELETE | 读取 / 更新 / 删除 |

mod handler;
pub mod validators;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/orders", get(handler::list).post(handler::create))
        .route(
            "/orders/{order_id}",
            get(handler::read)
                .put(handler::update)
                .delete(handler::destroy),
        )
}
