//! Request envelope extractor
//!
//! Request bodies arrive as `{ "data": { ... } }`. [`Payload`] unwraps the
//! envelope into the raw field map the validation steps work on. A missing
//! or non-object `data` becomes an empty map, so the required-field checks
//! report which field is missing; a body that is not JSON at all is rejected.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde_json::{Map, Value};

use crate::AppError;

/// The `data` object of a request body
#[derive(Debug, Clone, Default)]
pub struct Payload(pub Map<String, Value>);

impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state).await?;
        Ok(Self(unwrap_envelope(body)))
    }
}

fn unwrap_envelope(body: Value) -> Map<String, Value> {
    match body {
        Value::Object(mut envelope) => match envelope.remove("data") {
            Some(Value::Object(data)) => data,
            _ => Map::new(),
        },
        _ => Map::new(),
    }
}
