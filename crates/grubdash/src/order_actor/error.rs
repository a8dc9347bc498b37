//! Error types for the Order actor.

use crate::pipeline::stages::StageError;
use thiserror::Error;

/// Errors that can occur during order operations.
///
/// Every variant except [`OrderError::ActorCommunicationError`] is the caller's fault and is
/// reported with a 4xx status.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// A required field is absent, `null` or an empty string.
    #[error("Order must include a {0}")]
    MissingField(&'static str),

    /// `dishes` is not an array, or is an empty one.
    #[error("Order must include at least one dish")]
    InvalidDishList,

    /// The dish at this index has no quantity, or one that is not a positive integer.
    #[error("Dish {0} must have a quantity that is an integer greater than 0")]
    InvalidQuantity(usize),

    /// The requested order was not found.
    #[error("Order does not exist: {0}")]
    NotFound(String),

    #[error("Order id does not match route id. Order: {body}, Route: {route}")]
    IdMismatch { body: String, route: String },

    #[error("Order must have a status of pending, preparing, out-for-delivery, delivered")]
    InvalidStatus,

    #[error("A delivered order cannot be changed")]
    DeliveredImmutable,

    #[error("An order cannot be deleted unless it is pending")]
    DeleteNotPending,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    /// HTTP status code the error is reported with.
    pub fn status_code(&self) -> u16 {
        match self {
            OrderError::NotFound(_) => 404,
            OrderError::ActorCommunicationError(_) => 500,
            _ => 400,
        }
    }
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}

impl StageError for OrderError {
    fn missing_field(field: &'static str) -> Self {
        OrderError::MissingField(field)
    }

    fn id_mismatch(body_id: String, route_id: String) -> Self {
        OrderError::IdMismatch {
            body: body_id,
            route: route_id,
        }
    }
}
