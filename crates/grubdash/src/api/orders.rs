//! Handlers for `/orders` and `/orders/{order_id}`.

use super::{payload, ApiError, AppState, Envelope};
use crate::model::{Order, OrderId};
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;

pub async fn list(State(state): State<AppState>) -> Result<Json<Envelope<Vec<Order>>>, ApiError> {
    let orders = state.orders.list_orders().await?;
    Ok(Json(Envelope::new(orders)))
}

pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Envelope<Order>>), ApiError> {
    let order = state.orders.create_order(payload(&body)?).await?;
    tracing::info!(order_id = %order.id, "Order created");
    Ok((StatusCode::CREATED, Json(Envelope::new(order))))
}

pub async fn read(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Envelope<Order>>, ApiError> {
    let order = state.orders.find_order(OrderId::from(order_id)).await?;
    Ok(Json(Envelope::new(order)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    body: Bytes,
) -> Result<Json<Envelope<Order>>, ApiError> {
    let data = payload(&body)?;
    let order = state
        .orders
        .update_order(OrderId::from(order_id), data)
        .await?;
    Ok(Json(Envelope::new(order)))
}

pub async fn destroy(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.orders.delete_order(OrderId::from(order_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
