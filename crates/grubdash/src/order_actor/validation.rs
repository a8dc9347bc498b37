//! Order validation stages and the pipelines built from them.
//!
//! | Pipeline | Stages |
//! |----------|--------|
//! | create | `deliverTo`, `mobileNumber`, `dishes` present → dish list |
//! | update | route id → `deliverTo`, `mobileNumber`, `dishes`, `status` present → status transition → dish list |
//! | delete | status is pending |
//!
//! The order lookup itself (404 on a miss) happens in the actor before any of these run.
//! A status sent on create is stored as given, so no create stage looks at it.

use super::OrderError;
use crate::model::{Order, OrderDish, OrderStatus};
use crate::pipeline::stages::{match_route_id, require_field};
use crate::pipeline::{Payload, Pipeline, RequestContext};
use serde_json::Value;

/// `quantity` as a positive integer, if it is one.
fn positive_quantity(value: &Value) -> Option<u32> {
    value
        .as_u64()
        .filter(|quantity| *quantity >= 1)
        .and_then(|quantity| u32::try_from(quantity).ok())
}

fn order_dish(entry: &Value) -> Option<OrderDish> {
    let mut details = entry.as_object()?.clone();
    let quantity = details.remove("quantity").as_ref().and_then(positive_quantity)?;
    let dish_id = match details.remove("dishId") {
        Some(Value::String(id)) => Some(id),
        Some(other) => {
            // Kept verbatim with the other members
            details.insert("dishId".to_string(), other);
            None
        }
        None => None,
    };
    Some(OrderDish {
        dish_id,
        quantity,
        details,
    })
}

/// Reads the dish list, rejecting it the way the dish list stage does.
///
/// The first entry without a valid quantity is reported.
pub fn dishes(data: &Payload) -> Result<Vec<OrderDish>, OrderError> {
    let Some(Value::Array(entries)) = data.get("dishes") else {
        return Err(OrderError::InvalidDishList);
    };
    if entries.is_empty() {
        return Err(OrderError::InvalidDishList);
    }
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| order_dish(entry).ok_or(OrderError::InvalidQuantity(index)))
        .collect()
}

pub fn validate_dish_list(ctx: &RequestContext<'_, Order>) -> Result<(), OrderError> {
    dishes(ctx.data).map(|_| ())
}

/// A delivered order is rejected whatever the requested status. Otherwise the requested
/// status must be one of the four known ones; backward and sideways moves are allowed.
pub fn validate_status_transition(ctx: &RequestContext<'_, Order>) -> Result<(), OrderError> {
    if ctx.current.is_some_and(Order::is_delivered) {
        return Err(OrderError::DeliveredImmutable);
    }
    match ctx.data.get("status") {
        Some(Value::String(status)) => status
            .parse::<OrderStatus>()
            .map(|_| ())
            .map_err(|_| OrderError::InvalidStatus),
        _ => Err(OrderError::InvalidStatus),
    }
}

pub fn ensure_pending(ctx: &RequestContext<'_, Order>) -> Result<(), OrderError> {
    match ctx.current {
        Some(order) if order.is_pending() => Ok(()),
        _ => Err(OrderError::DeleteNotPending),
    }
}

pub fn create_pipeline() -> Pipeline<Order, OrderError> {
    Pipeline::new("order.create")
        .stage("deliverTo", require_field("deliverTo"))
        .stage("mobileNumber", require_field("mobileNumber"))
        .stage("dishes", require_field("dishes"))
        .stage("dish list", validate_dish_list)
}

pub fn update_pipeline() -> Pipeline<Order, OrderError> {
    Pipeline::new("order.update")
        .stage("route id", match_route_id())
        .stage("deliverTo", require_field("deliverTo"))
        .stage("mobileNumber", require_field("mobileNumber"))
        .stage("dishes", require_field("dishes"))
        .stage("status", require_field("status"))
        .stage("status transition", validate_status_transition)
        .stage("dish list", validate_dish_list)
}

pub fn delete_pipeline() -> Pipeline<Order, OrderError> {
    Pipeline::new("order.delete").stage("pending", ensure_pending)
}
