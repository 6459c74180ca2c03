//! Order validation steps
//!
//! | Operation | Steps |
//! |-----------|-------|
//! | create | required_fields → dish_lines → optional_status → fields |
//! | read | order_exists |
//! | update | order_exists → required_fields → dish_lines → id_matches_route → required_status → fields |
//! | destroy | order_exists → status_pending |
//!
//! Status transitions are unrestricted: an update may move an order to any
//! known status. Only deletion depends on the current status.

use serde_json::{Map, Value};
use shared::models::{Order, OrderFields, OrderLine, OrderStatus};

use crate::db::OrderRepository;
use crate::pipeline::Pipeline;
use crate::utils::validation::{
    conflicting_id, first_missing, is_missing, text_field, whole_number,
};
use crate::utils::{AppError, AppResult};

const REQUIRED_FIELDS: [&str; 3] = ["deliverTo", "mobileNumber", "dishes"];

const STATUS_MESSAGE: &str =
    "Order must have a status of pending, preparing, out-for-delivery, delivered";

/// Request context threaded through the order steps
pub struct OrderRequest<'a> {
    store: &'a OrderRepository,
    body: &'a Map<String, Value>,
    route_id: Option<&'a str>,
    /// Set by `order_exists`
    pub order: Option<&'a Order>,
    dishes: Option<Vec<OrderLine>>,
    status: Option<OrderStatus>,
    fields: Option<OrderFields>,
}

impl<'a> OrderRequest<'a> {
    pub fn new(store: &'a OrderRepository, body: &'a Map<String, Value>) -> Self {
        Self {
            store,
            body,
            route_id: None,
            order: None,
            dishes: None,
            status: None,
            fields: None,
        }
    }

    pub fn for_route(mut self, route_id: &'a str) -> Self {
        self.route_id = Some(route_id);
        self
    }

    /// Validated fields, once the `fields` step has run
    pub fn into_fields(self) -> AppResult<OrderFields> {
        self.fields
            .ok_or_else(|| AppError::internal("order pipeline finished without fields"))
    }

    /// Matched order, once `order_exists` has run
    pub fn into_order(self) -> AppResult<&'a Order> {
        self.order
            .ok_or_else(|| AppError::internal("order pipeline finished without an order"))
    }

    fn route_id(&self) -> AppResult<&'a str> {
        self.route_id
            .ok_or_else(|| AppError::internal("order route id not set"))
    }
}

// =============================================================================
// Pipelines
// =============================================================================

pub fn create<'a>() -> Pipeline<OrderRequest<'a>> {
    Pipeline::new("order.create")
        .step("required_fields", required_fields)
        .step("dish_lines", dish_lines)
        .step("optional_status", optional_status)
        .step("fields", collect_fields)
}

pub fn read<'a>() -> Pipeline<OrderRequest<'a>> {
    Pipeline::new("order.read").step("order_exists", order_exists)
}

pub fn update<'a>() -> Pipeline<OrderRequest<'a>> {
    Pipeline::new("order.update")
        .step("order_exists", order_exists)
        .step("required_fields", required_fields)
        .step("dish_lines", dish_lines)
        .step("id_matches_route", id_matches_route)
        .step("required_status", required_status)
        .step("fields", collect_fields)
}

pub fn destroy<'a>() -> Pipeline<OrderRequest<'a>> {
    Pipeline::new("order.destroy")
        .step("order_exists", order_exists)
        .step("status_pending", status_pending)
}

// =============================================================================
// Steps
// =============================================================================

fn order_exists(ctx: &mut OrderRequest<'_>) -> AppResult<()> {
    let id = ctx.route_id()?;
    let store = ctx.store;
    let order = store
        .find_by_id(id)
        .ok_or_else(|| AppError::not_found(format!("Order does not exist: {id}")))?;
    ctx.order = Some(order);
    Ok(())
}

fn required_fields(ctx: &mut OrderRequest<'_>) -> AppResult<()> {
    match first_missing(ctx.body, &REQUIRED_FIELDS) {
        Some(field) => Err(AppError::invalid(format!("Order must include a {field}"))),
        None => Ok(()),
    }
}

/// `dishes` must be a non-empty array of lines with positive integer
/// quantities; the first offending line is reported by index
fn dish_lines(ctx: &mut OrderRequest<'_>) -> AppResult<()> {
    let lines = match ctx.body.get("dishes") {
        Some(Value::Array(lines)) if !lines.is_empty() => lines,
        _ => return Err(AppError::invalid("Order must include at least one dish")),
    };

    let dishes = lines
        .iter()
        .enumerate()
        .map(|(index, line)| parse_line(index, line))
        .collect::<AppResult<Vec<_>>>()?;
    ctx.dishes = Some(dishes);
    Ok(())
}

fn parse_line(index: usize, line: &Value) -> AppResult<OrderLine> {
    let quantity = line
        .get("quantity")
        .and_then(whole_number)
        .and_then(|q| u32::try_from(q).ok())
        .filter(|q| *q > 0)
        .ok_or_else(|| {
            AppError::invalid(format!(
                "Dish {index} must have a quantity that is an integer greater than 0"
            ))
        })?;

    // quantity is stored as an integer even when sent as e.g. 2.0
    let mut line = line.clone();
    line["quantity"] = Value::from(quantity);
    serde_json::from_value(line)
        .map_err(|e| AppError::invalid(format!("Dish {index} is malformed: {e}")))
}

/// On create a status is optional; absent means pending
fn optional_status(ctx: &mut OrderRequest<'_>) -> AppResult<()> {
    let status = ctx.body.get("status");
    ctx.status = if is_missing(status) {
        Some(OrderStatus::Pending)
    } else {
        Some(parse_status(status)?)
    };
    Ok(())
}

/// On update a known status is mandatory
fn required_status(ctx: &mut OrderRequest<'_>) -> AppResult<()> {
    ctx.status = Some(parse_status(ctx.body.get("status"))?);
    Ok(())
}

fn parse_status(value: Option<&Value>) -> AppResult<OrderStatus> {
    value
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| AppError::invalid(STATUS_MESSAGE))
}

fn id_matches_route(ctx: &mut OrderRequest<'_>) -> AppResult<()> {
    let route_id = ctx.route_id()?;
    match conflicting_id(ctx.body, route_id) {
        Some(id) => Err(AppError::invalid(format!(
            "Order id does not match route id. Order: {id}, Route: {route_id}."
        ))),
        None => Ok(()),
    }
}

fn status_pending(ctx: &mut OrderRequest<'_>) -> AppResult<()> {
    let order = ctx
        .order
        .ok_or_else(|| AppError::internal("order not looked up before status check"))?;
    if !order.status.is_deletable() {
        return Err(AppError::invalid(
            "An order cannot be deleted unless it is pending",
        ));
    }
    Ok(())
}

/// Copy the allow-listed fields out of the body; anything else is ignored
fn collect_fields(ctx: &mut OrderRequest<'_>) -> AppResult<()> {
    let text = |field: &str| {
        text_field(ctx.body, field)
            .ok_or_else(|| AppError::invalid(format!("Order {field} must be a string")))
    };
    let deliver_to = text("deliverTo")?;
    let mobile_number = text("mobileNumber")?;
    let status = ctx
        .status
        .ok_or_else(|| AppError::internal("order status not validated"))?;
    let dishes = ctx
        .dishes
        .take()
        .ok_or_else(|| AppError::internal("order dishes not validated"))?;

    ctx.fields = Some(OrderFields {
        deliver_to,
        mobile_number,
        dishes,
        status,
    });
    Ok(())
}
