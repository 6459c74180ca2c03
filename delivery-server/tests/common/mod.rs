//! Shared helpers for the HTTP integration tests

#![allow(dead_code)]

use axum::{Router, body::Body};
use delivery_server::{Config, DishRepository, OrderRepository, ServerState, build_app};
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use shared::{Dish, Order};
use tower::ServiceExt;

pub fn seed_dishes() -> Vec<Dish> {
    serde_json::from_value(json!([
        {
            "id": "1",
            "name": "Dolcelatte and chickpea spaghetti",
            "description": "Spaghetti topped with a blend of dolcelatte and fresh chickpeas",
            "price": 19,
            "image_url": "https://example.com/spaghetti.jpg"
        },
        {
            "id": "2",
            "name": "Falafel and tahini bagel",
            "description": "A warm bagel filled with falafel and tahini",
            "price": 6,
            "image_url": "https://example.com/bagel.jpg"
        }
    ]))
    .unwrap()
}

pub fn seed_orders() -> Vec<Order> {
    serde_json::from_value(json!([
        {
            "id": "1",
            "deliverTo": "308 Negra Arroyo Lane, Albuquerque, NM",
            "mobileNumber": "(505) 143-3369",
            "status": "pending",
            "dishes": [{ "dishId": "1", "quantity": 2 }]
        },
        {
            "id": "2",
            "deliverTo": "1600 Pennsylvania Avenue NW, Washington, DC 20500",
            "mobileNumber": "(202) 456-1111",
            "status": "preparing",
            "dishes": [{ "dishId": "2", "quantity": 1 }]
        }
    ]))
    .unwrap()
}

pub fn seeded_state() -> ServerState {
    ServerState::new(
        Config::with_overrides(0, None, None),
        DishRepository::from_records(seed_dishes()).unwrap(),
        OrderRepository::from_records(seed_orders()).unwrap(),
    )
}

pub fn app(state: &ServerState) -> Router {
    build_app().with_state(state.clone())
}

/// Send a request through the full middleware stack
///
/// Returns the status and the JSON body (`Null` for an empty body).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
