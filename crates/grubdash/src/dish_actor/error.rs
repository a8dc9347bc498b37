//! Error types for the Dish actor.

use crate::pipeline::stages::StageError;
use thiserror::Error;

/// Errors that can occur during dish operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DishError {
    /// A required field is absent, `null` or an empty string.
    #[error("Dish must include a {0}")]
    MissingField(&'static str),

    /// The price is missing, not a number, or not above zero.
    #[error("Dish must have a price that is an integer greater than 0")]
    InvalidPrice,

    /// The requested dish was not found.
    #[error("Dish does not exist: {0}")]
    NotFound(String),

    #[error("Dish id does not match route id. Dish: {body}, Route: {route}")]
    IdMismatch { body: String, route: String },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl DishError {
    /// HTTP status code the error is reported with.
    pub fn status_code(&self) -> u16 {
        match self {
            DishError::NotFound(_) => 404,
            DishError::ActorCommunicationError(_) => 500,
            _ => 400,
        }
    }
}

impl From<String> for DishError {
    fn from(msg: String) -> Self {
        DishError::ActorCommunicationError(msg)
    }
}

impl StageError for DishError {
    fn missing_field(field: &'static str) -> Self {
        DishError::MissingField(field)
    }

    fn id_mismatch(body_id: String, route_id: String) -> Self {
        DishError::IdMismatch {
            body: body_id,
            route: route_id,
        }
    }
}
