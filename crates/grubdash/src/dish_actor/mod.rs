//! # Dish Actor
//!
//! The menu. Orders refer to dishes by id, but nothing checks that a referenced dish
//! exists, so the two actors run independently.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Dish`]
//! - [`error`] - [`DishError`] type for type-safe error handling
//! - [`validation`] - price checks and the create/update pipelines
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;
pub mod error;
pub mod validation;

pub use error::*;

use crate::clients::DishClient;
use crate::model::{Dish, DishId};
use actor_framework::ResourceActor;

/// Creates a new Dish actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Dish>, DishClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, DishId::generate);
    let client = DishClient::new(generic_client);

    (actor, client)
}
