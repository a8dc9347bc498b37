//! HTTP API for orders and dishes.
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | GET | `/orders` | 200 `{data: Order[]}` |
//! | POST | `/orders` | 201 `{data: Order}` |
//! | GET | `/orders/{orderId}` | 200 `{data: Order}` |
//! | PUT | `/orders/{orderId}` | 200 `{data: Order}` |
//! | DELETE | `/orders/{orderId}` | 204 |
//! | GET | `/dishes` | 200 `{data: Dish[]}` |
//! | POST | `/dishes` | 201 `{data: Dish}` |
//! | GET | `/dishes/{dishId}` | 200 `{data: Dish}` |
//! | PUT | `/dishes/{dishId}` | 200 `{data: Dish}` |
//!
//! Request bodies are `{"data": {...}}`. Failures are `{"message": "..."}` (see [`error`]).

pub mod dishes;
pub mod error;
pub mod orders;

pub use error::{ApiError, ErrorBody};

use crate::clients::{DishClient, OrderClient};
use crate::lifecycle::RestaurantSystem;
use crate::pipeline::Payload;
use axum::body::Bytes;
use axum::http::{Method, StatusCode, Uri};
use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state for the API server.
#[derive(Clone)]
pub struct AppState {
    pub orders: OrderClient,
    pub dishes: DishClient,
}

impl AppState {
    pub fn new(orders: OrderClient, dishes: DishClient) -> Self {
        Self { orders, dishes }
    }

    /// State holding clones of the system's clients.
    pub fn from_system(system: &RestaurantSystem) -> Self {
        Self::new(system.order_client.clone(), system.dish_client.clone())
    }
}

/// Success body: `{"data": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Builds the router with every route, the fallbacks and the middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/orders",
            get(orders::list)
                .post(orders::create)
                .fallback(method_not_allowed),
        )
        .route(
            "/orders/{order_id}",
            get(orders::read)
                .put(orders::update)
                .delete(orders::destroy)
                .fallback(method_not_allowed),
        )
        .route(
            "/dishes",
            get(dishes::list)
                .post(dishes::create)
                .fallback(method_not_allowed),
        )
        .route(
            "/dishes/{dish_id}",
            get(dishes::read)
                .put(dishes::update)
                .fallback(method_not_allowed),
        )
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// The `data` member of a request body.
///
/// An empty body, a body without `data`, or one whose `data` is not an object all give an
/// empty payload, which the pipelines then reject field by field.
pub fn payload(body: &Bytes) -> Result<Payload, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Payload::new());
    }
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::bad_request(format!("Request body is not valid JSON: {e}")))?;

    let data = match value {
        Value::Object(mut body) => body.remove("data"),
        _ => None,
    };
    Ok(match data {
        Some(Value::Object(data)) => data,
        _ => Payload::new(),
    })
}

async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::new(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("{} not allowed for {}", method, uri.path()),
    )
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::new(
        StatusCode::NOT_FOUND,
        format!("Path not found: {}", uri.path()),
    )
}
