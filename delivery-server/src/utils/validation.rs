//! Input validation helpers
//!
//! Field-level checks over the raw `data` object of a request body. The
//! dish and order validation steps are built from these.

use serde_json::{Map, Value};

/// A field is missing when absent, `null` or an empty string
pub fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// First field of `fields` (in order) that is missing from `body`
pub fn first_missing<'f>(body: &Map<String, Value>, fields: &[&'f str]) -> Option<&'f str> {
    fields
        .iter()
        .copied()
        .find(|field| is_missing(body.get(*field)))
}

/// Owned string value of `field`, `None` when absent or not a string
pub fn text_field(body: &Map<String, Value>, field: &str) -> Option<String> {
    body.get(field).and_then(Value::as_str).map(str::to_string)
}

/// Non-negative integer value of `field`
pub fn non_negative_integer(body: &Map<String, Value>, field: &str) -> Option<u64> {
    body.get(field).and_then(whole_number)
}

/// A non-negative whole number; `5.0` counts as 5, `5.5` does not
pub fn whole_number(value: &Value) -> Option<u64> {
    // 2^64, the first float past u64::MAX
    const U64_BOUND: f64 = 18_446_744_073_709_551_616.0;

    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f < U64_BOUND)
            .map(|f| f as u64)
    })
}

/// The body `id` when it is supplied and differs from `route_id`
///
/// Returns the offending id rendered for an error message. A missing id
/// (absent, null, empty) never conflicts.
pub fn conflicting_id(body: &Map<String, Value>, route_id: &str) -> Option<String> {
    let id = body.get("id");
    if is_missing(id) {
        return None;
    }
    match id {
        Some(Value::String(s)) if s == route_id => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test body must be an object"),
        }
    }

    #[test]
    fn test_first_missing_respects_order() {
        let data = body(json!({ "name": "Soup", "price": null, "image_url": "" }));
        assert_eq!(
            first_missing(&data, &["name", "description", "price", "image_url"]),
            Some("description")
        );
    }

    #[test]
    fn test_zero_is_present() {
        let data = body(json!({ "price": 0 }));
        assert_eq!(first_missing(&data, &["price"]), None);
        assert_eq!(non_negative_integer(&data, "price"), Some(0));
    }

    #[test]
    fn test_non_negative_integer_rejects_other_shapes() {
        let data = body(json!({ "a": -1, "b": "5", "c": 2.5 }));
        assert_eq!(non_negative_integer(&data, "a"), None);
        assert_eq!(non_negative_integer(&data, "b"), None);
        assert_eq!(non_negative_integer(&data, "c"), None);
    }

    #[test]
    fn test_whole_float_is_an_integer() {
        let data = body(json!({ "price": 5.0, "zero": 0.0 }));
        assert_eq!(non_negative_integer(&data, "price"), Some(5));
        assert_eq!(non_negative_integer(&data, "zero"), Some(0));
        assert_eq!(whole_number(&json!(-3.0)), None);
        assert_eq!(whole_number(&json!(1e20)), None);
    }

    #[test]
    fn test_conflicting_id() {
        assert_eq!(conflicting_id(&body(json!({})), "3"), None);
        assert_eq!(conflicting_id(&body(json!({ "id": "" })), "3"), None);
        assert_eq!(conflicting_id(&body(json!({ "id": "3" })), "3"), None);
        assert_eq!(
            conflicting_id(&body(json!({ "id": "4" })), "3"),
            Some("4".to_string())
        );
        assert_eq!(
            conflicting_id(&body(json!({ "id": 3 })), "3"),
            Some("3".to_string())
        );
    }
}
