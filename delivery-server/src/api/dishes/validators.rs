//! Dish validation steps
//!
//! | Operation | Steps |
//! |-----------|-------|
//! | create | required_fields → price → fields |
//! | read | dish_exists |
//! | update | dish_exists → required_fields → price → id_matches_route → fields |

use serde_json::{Map, Value};
use shared::models::{Dish, DishFields};

use crate::db::DishRepository;
use crate::pipeline::Pipeline;
use crate::utils::validation::{conflicting_id, first_missing, non_negative_integer, text_field};
use crate::utils::{AppError, AppResult};

const REQUIRED_FIELDS: [&str; 4] = ["name", "description", "price", "image_url"];

/// Request context threaded through the dish steps
pub struct DishRequest<'a> {
    store: &'a DishRepository,
    body: &'a Map<String, Value>,
    route_id: Option<&'a str>,
    /// Set by `dish_exists`
    pub dish: Option<&'a Dish>,
    price: Option<u64>,
    fields: Option<DishFields>,
}

impl<'a> DishRequest<'a> {
    pub fn new(store: &'a DishRepository, body: &'a Map<String, Value>) -> Self {
        Self {
            store,
            body,
            route_id: None,
            dish: None,
            price: None,
            fields: None,
        }
    }

    pub fn for_route(mut self, route_id: &'a str) -> Self {
        self.route_id = Some(route_id);
        self
    }

    /// Validated fields, once the `fields` step has run
    pub fn into_fields(self) -> AppResult<DishFields> {
        self.fields
            .ok_or_else(|| AppError::internal("dish pipeline finished without fields"))
    }

    /// Matched dish, once `dish_exists` has run
    pub fn into_dish(self) -> AppResult<&'a Dish> {
        self.dish
            .ok_or_else(|| AppError::internal("dish pipeline finished without a dish"))
    }

    fn route_id(&self) -> AppResult<&'a str> {
        self.route_id
            .ok_or_else(|| AppError::internal("dish route id not set"))
    }
}

// =============================================================================
// Pipelines
// =============================================================================

pub fn create<'a>() -> Pipeline<DishRequest<'a>> {
    Pipeline::new("dish.create")
        .step("required_fields", required_fields)
        .step("price", valid_price)
        .step("fields", collect_fields)
}

pub fn read<'a>() -> Pipeline<DishRequest<'a>> {
    Pipeline::new("dish.read").step("dish_exists", dish_exists)
}

pub fn update<'a>() -> Pipeline<DishRequest<'a>> {
    Pipeline::new("dish.update")
        .step("dish_exists", dish_exists)
        .step("required_fields", required_fields)
        .step("price", valid_price)
        .step("id_matches_route", id_matches_route)
        .step("fields", collect_fields)
}

// =============================================================================
// Steps
// =============================================================================

fn dish_exists(ctx: &mut DishRequest<'_>) -> AppResult<()> {
    let id = ctx.route_id()?;
    let store = ctx.store;
    let dish = store
        .find_by_id(id)
        .ok_or_else(|| AppError::not_found(format!("Dish does not exist: {id}")))?;
    ctx.dish = Some(dish);
    Ok(())
}

fn required_fields(ctx: &mut DishRequest<'_>) -> AppResult<()> {
    match first_missing(ctx.body, &REQUIRED_FIELDS) {
        Some(field) => Err(AppError::invalid(format!("Dish must include a {field}"))),
        None => Ok(()),
    }
}

fn valid_price(ctx: &mut DishRequest<'_>) -> AppResult<()> {
    let price = non_negative_integer(ctx.body, "price").ok_or_else(|| {
        AppError::invalid("Dish must have a price that is an integer greater than or equal to 0")
    })?;
    ctx.price = Some(price);
    Ok(())
}

fn id_matches_route(ctx: &mut DishRequest<'_>) -> AppResult<()> {
    let route_id = ctx.route_id()?;
    match conflicting_id(ctx.body, route_id) {
        Some(id) => Err(AppError::invalid(format!(
            "Dish id does not match route id. Dish: {id}, Route: {route_id}"
        ))),
        None => Ok(()),
    }
}

/// Copy the allow-listed fields out of the body; anything else is ignored
fn collect_fields(ctx: &mut DishRequest<'_>) -> AppResult<()> {
    let text = |field: &str| {
        text_field(ctx.body, field)
            .ok_or_else(|| AppError::invalid(format!("Dish {field} must be a string")))
    };
    let fields = DishFields {
        name: text("name")?,
        description: text("description")?,
        image_url: text("image_url")?,
        price: ctx
            .price
            .ok_or_else(|| AppError::internal("dish price not validated"))?,
    };
    ctx.fields = Some(fields);
    Ok(())
}
