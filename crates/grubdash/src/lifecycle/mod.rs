//! # System Lifecycle & Orchestration
//!
//! This module starts the actors the service needs, hands out their clients, and shuts
//! them down again.
//!
//! ## The RestaurantSystem Pattern
//!
//! ```rust,ignore
//! impl RestaurantSystem {
//!     pub fn new(buffer_size: usize) -> Self {
//!         // 1. Create actors and their clients
//!         let (order_actor, order_client) = order_actor::new(buffer_size);
//!         let (dish_actor, dish_client) = dish_actor::new(buffer_size);
//!
//!         // 2. Start them (neither has dependencies, so the context is `()`)
//!         let order_handle = tokio::spawn(order_actor.run(()));
//!         let dish_handle = tokio::spawn(dish_actor.run(()));
//!
//!         Self { order_client, dish_client, handles: vec![order_handle, dish_handle] }
//!     }
//! }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None` once queued requests
//!    have been answered
//! 3. **Await completion** - Wait for every actor task to finish
//!
//! Clones of the clients held elsewhere (for example by the HTTP router state) keep their
//! actor alive, so drop those first.

pub mod restaurant_system;

pub use restaurant_system::*;
