//! # Order Actor
//!
//! This module implements the Order resource actor: the store of orders and the validation
//! that guards every change to it.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`validation`] - the stages and pipelines each request goes through
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use grubdash::order_actor;
//! use grubdash::pipeline::Payload;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = order_actor::new(32);
//!
//!     // Start the actor (no dependencies, so context is ())
//!     tokio::spawn(actor.run(()));
//!
//!     let data: Payload = json!({
//!         "deliverTo": "Rick Sanchez (C-132)",
//!         "mobileNumber": "(202) 456-1111",
//!         "dishes": [{"dishId": "90c3d873684bf381dfab29034b5bba73", "quantity": 1}]
//!     })
//!     .as_object()
//!     .cloned()
//!     .unwrap_or_default();
//!
//!     let order = client.create_order(data).await?;
//!     assert_eq!(order.status, None);
//!     Ok(())
//! }
//! ```
//!
//! ## Key Features
//!
//! - **Serialized mutations**: one request at a time, so validation and write never interleave
//! - **Random IDs**: 32 hex characters from a v4 UUID
//! - **Status lifecycle**: a delivered order is frozen; only pending orders can be deleted

pub mod entity;
pub mod error;
pub mod validation;

pub use error::*;

use crate::clients::OrderClient;
use crate::model::{Order, OrderId};
use actor_framework::ResourceActor;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, OrderId::generate);
    let client = OrderClient::new(generic_client);

    (actor, client)
}
