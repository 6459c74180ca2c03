mod common;

use common::{app, seeded_state, send};
use http::{Method, StatusCode};
use serde_json::{Value, json};

fn new_order() -> Value {
    json!({
        "data": {
            "deliverTo": "Rick Sanchez (C-132)",
            "mobileNumber": "(202) 456-1111",
            "dishes": [
                {
                    "dishId": "1",
                    "name": "Dolcelatte and chickpea spaghetti",
                    "price": 19,
                    "quantity": 2
                }
            ]
        }
    })
}

fn with_status(mut body: Value, status: &str) -> Value {
    body["data"]["status"] = json!(status);
    body
}

#[tokio::test]
async fn test_list_orders() {
    let state = seeded_state();
    let (status, body) = send(&app(&state), Method::GET, "/orders", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_create_then_read_round_trip() {
    let state = seeded_state();
    let app = app(&state);

    let (status, created) = send(&app, Method::POST, "/orders", Some(new_order())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["id"], "3");
    assert_eq!(created["data"]["status"], "pending");
    assert_eq!(created["data"]["dishes"][0]["name"], "Dolcelatte and chickpea spaghetti");

    let (status, read) = send(&app, Method::GET, "/orders/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(read, created);
}

#[tokio::test]
async fn test_create_keeps_numeric_dish_id() {
    let state = seeded_state();
    let app = app(&state);
    let mut body = new_order();
    body["data"]["dishes"] = json!([{ "dishId": 3, "quantity": 1 }]);

    let (status, created) = send(&app, Method::POST, "/orders", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["dishes"], json!([{ "dishId": 3, "quantity": 1 }]));

    let (status, read) = send(&app, Method::GET, "/orders/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(read["data"]["dishes"][0]["dishId"], 3);
}

#[tokio::test]
async fn test_create_with_empty_dishes() {
    let state = seeded_state();
    let mut body = new_order();
    body["data"]["dishes"] = json!([]);

    let (status, error) = send(&app(&state), Method::POST, "/orders", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "Order must include at least one dish");
}

#[tokio::test]
async fn test_create_with_zero_quantity_line() {
    let state = seeded_state();
    let mut body = new_order();
    body["data"]["dishes"] = json!([
        { "dishId": "1", "quantity": 1 },
        { "dishId": "2", "quantity": 3 },
        { "dishId": "2", "quantity": 0 }
    ]);

    let (status, error) = send(&app(&state), Method::POST, "/orders", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error["error"],
        "Dish 2 must have a quantity that is an integer greater than 0"
    );
    assert_eq!(state.orders.read().len(), 2);
}

#[tokio::test]
async fn test_create_missing_mobile_number() {
    let state = seeded_state();
    let mut body = new_order();
    body["data"]
        .as_object_mut()
        .unwrap()
        .remove("mobileNumber");

    let (status, error) = send(&app(&state), Method::POST, "/orders", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "Order must include a mobileNumber");
}

#[tokio::test]
async fn test_read_unknown_order() {
    let state = seeded_state();
    let (status, error) = send(&app(&state), Method::GET, "/orders/99", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["error"], "Order does not exist: 99");
}

#[tokio::test]
async fn test_update_order_status() {
    let state = seeded_state();
    let app = app(&state);
    let body = with_status(new_order(), "out-for-delivery");

    let (status, updated) = send(&app, Method::PUT, "/orders/1", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["id"], "1");
    assert_eq!(updated["data"]["status"], "out-for-delivery");
    assert_eq!(updated["data"]["deliverTo"], "Rick Sanchez (C-132)");

    let (_, read) = send(&app, Method::GET, "/orders/1", None).await;
    assert_eq!(read, updated);
}

#[tokio::test]
async fn test_update_ignores_unlisted_fields() {
    let state = seeded_state();
    let mut body = with_status(new_order(), "delivered");
    body["data"]["id"] = json!("2");
    body["data"]["tip"] = json!(5);

    let (status, updated) = send(&app(&state), Method::PUT, "/orders/2", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["id"], "2");
    assert!(updated["data"].get("tip").is_none());
}

#[tokio::test]
async fn test_update_mismatched_id() {
    let state = seeded_state();
    let mut body = with_status(new_order(), "pending");
    body["data"]["id"] = json!("2");

    let (status, error) = send(&app(&state), Method::PUT, "/orders/1", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error["error"],
        "Order id does not match route id. Order: 2, Route: 1."
    );
}

#[tokio::test]
async fn test_update_requires_valid_status() {
    let state = seeded_state();
    let app = app(&state);

    for body in [new_order(), with_status(new_order(), "invalid")] {
        let (status, error) = send(&app, Method::PUT, "/orders/1", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            error["error"],
            "Order must have a status of pending, preparing, out-for-delivery, delivered"
        );
    }
}

#[tokio::test]
async fn test_update_unknown_order() {
    let state = seeded_state();
    let body = with_status(new_order(), "pending");
    let (status, _) = send(&app(&state), Method::PUT, "/orders/99", Some(body)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_destroy_pending_order() {
    let state = seeded_state();
    let app = app(&state);

    let (status, body) = send(&app, Method::DELETE, "/orders/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (_, list) = send(&app, Method::GET, "/orders", None).await;
    let ids: Vec<_> = list["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|order| order["id"].clone())
        .collect();
    assert_eq!(ids, vec![json!("2")]);

    let (status, _) = send(&app, Method::GET, "/orders/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_destroy_preparing_order() {
    let state = seeded_state();
    let (status, error) = send(&app(&state), Method::DELETE, "/orders/2", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "An order cannot be deleted unless it is pending");
    assert!(state.orders.read().find_by_id("2").is_some());
}

#[tokio::test]
async fn test_destroy_unknown_order() {
    let state = seeded_state();
    let (status, error) = send(&app(&state), Method::DELETE, "/orders/99", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["error"], "Order does not exist: 99");
}

#[tokio::test]
async fn test_order_becomes_deletable_after_returning_to_pending() {
    let state = seeded_state();
    let app = app(&state);

    let body = with_status(new_order(), "pending");
    let (status, _) = send(&app, Method::PUT, "/orders/2", Some(body)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::DELETE, "/orders/2", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}
