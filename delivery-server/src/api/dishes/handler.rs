//! Dish API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Map;
use shared::{DataResponse, Dish};

use super::validators::{self, DishRequest};
use crate::api::payload::Payload;
use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /dishes - 获取所有菜品
pub async fn list(State(state): State<ServerState>) -> Json<DataResponse<Vec<Dish>>> {
    let dishes = state.dishes.read().find_all().to_vec();
    Json(DataResponse::new(dishes))
}

/// POST /dishes - 创建菜品
pub async fn create(
    State(state): State<ServerState>,
    Payload(body): Payload,
) -> AppResult<(StatusCode, Json<DataResponse<Dish>>)> {
    let mut store = state.dishes.write();
    let fields = validators::create()
        .run(DishRequest::new(&store, &body))?
        .into_fields()?;
    let dish = store.create(fields);
    Ok((StatusCode::CREATED, Json(DataResponse::new(dish))))
}

/// GET /dishes/{dish_id} - 获取单个菜品
pub async fn read(
    State(state): State<ServerState>,
    Path(dish_id): Path<String>,
) -> AppResult<Json<DataResponse<Dish>>> {
    let store = state.dishes.read();
    let body = Map::new();
    let dish = validators::read()
        .run(DishRequest::new(&store, &body).for_route(&dish_id))?
        .into_dish()?
        .clone();
    Ok(Json(DataResponse::new(dish)))
}

/// PUT /dishes/{dish_id} - 更新菜品
pub async fn update(
    State(state): State<ServerState>,
    Path(dish_id): Path<String>,
    Payload(body): Payload,
) -> AppResult<Json<DataResponse<Dish>>> {
    let mut store = state.dishes.write();
    let fields = validators::update()
        .run(DishRequest::new(&store, &body).for_route(&dish_id))?
        .into_fields()?;
    let dish = store.update(&dish_id, fields)?;
    Ok(Json(DataResponse::new(dish)))
}
