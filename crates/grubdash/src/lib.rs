//! # GrubDash
//!
//! An in-memory order and dish service built on the actor framework.
//!
//! - **[model]**: Pure data structures ([`Order`](model::Order), [`Dish`](model::Dish)).
//! - **[pipeline]**: The ordered validation stages every request goes through.
//! - **[order_actor]** / **[dish_actor]**: `ActorEntity` implementations, errors and
//!   validation for each resource.
//! - **[clients]**: Type-safe wrappers that hide the message passing.
//! - **[lifecycle]**: Starts and stops the actors.
//! - **[api]**: The axum router.
//! - **[config]**: CLI and environment settings for the binary.

pub mod api;
pub mod clients;
pub mod config;
pub mod dish_actor;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod pipeline;
