//! Handlers for `/dishes` and `/dishes/{dish_id}`. Dishes cannot be deleted.

use super::{payload, ApiError, AppState, Envelope};
use crate::model::{Dish, DishId};
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;

pub async fn list(State(state): State<AppState>) -> Result<Json<Envelope<Vec<Dish>>>, ApiError> {
    let dishes = state.dishes.list_dishes().await?;
    Ok(Json(Envelope::new(dishes)))
}

pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Envelope<Dish>>), ApiError> {
    let dish = state.dishes.create_dish(payload(&body)?).await?;
    Ok((StatusCode::CREATED, Json(Envelope::new(dish))))
}

pub async fn read(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
) -> Result<Json<Envelope<Dish>>, ApiError> {
    let dish = state.dishes.find_dish(DishId::from(dish_id)).await?;
    Ok(Json(Envelope::new(dish)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
    body: Bytes,
) -> Result<Json<Envelope<Dish>>, ApiError> {
    let data = payload(&body)?;
    let dish = state.dishes.update_dish(DishId::from(dish_id), data).await?;
    Ok(Json(Envelope::new(dish)))
}
