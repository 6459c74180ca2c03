//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Map;
use shared::{DataResponse, Order};

use super::validators::{self, OrderRequest};
use crate::api::payload::Payload;
use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /orders - 获取所有订单
pub async fn list(State(state): State<ServerState>) -> Json<DataResponse<Vec<Order>>> {
    let orders = state.orders.read().find_all().to_vec();
    Json(DataResponse::new(orders))
}

/// POST /orders - 创建订单
pub async fn create(
    State(state): State<ServerState>,
    Payload(body): Payload,
) -> AppResult<(StatusCode, Json<DataResponse<Order>>)> {
    let mut store = state.orders.write();
    let fields = validators::create()
        .run(OrderRequest::new(&store, &body))?
        .into_fields()?;
    let order = store.create(fields);
    Ok((StatusCode::CREATED, Json(DataResponse::new(order))))
}

/// GET /orders/{order_id} - 获取单个订单
pub async fn read(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<DataResponse<Order>>> {
    let store = state.orders.read();
    let body = Map::new();
    let order = validators::read()
        .run(OrderRequest::new(&store, &body).for_route(&order_id))?
        .into_order()?
        .clone();
    Ok(Json(DataResponse::new(order)))
}

/// PUT /orders/{order_id} - 更新订单 (含状态变更)
pub async fn update(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
    Payload(body): Payload,
) -> AppResult<Json<DataResponse<Order>>> {
    let mut store = state.orders.write();
    let fields = validators::update()
        .run(OrderRequest::new(&store, &body).for_route(&order_id))?
        .into_fields()?;
    let order = store.update(&order_id, fields)?;
    Ok(Json(DataResponse::new(order)))
}

/// DELETE /orders/{order_id} - 删除订单 (仅 pending 状态)
pub async fn destroy(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
) -> AppResult<StatusCode> {
    let mut store = state.orders.write();
    let body = Map::new();
    validators::destroy().run(OrderRequest::new(&store, &body).for_route(&order_id))?;
    store.delete(&order_id)?;
    Ok(StatusCode::NO_CONTENT)
}
