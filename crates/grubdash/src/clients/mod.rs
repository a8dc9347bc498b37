//! # Resource Clients
//!
//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient). Each one
//! speaks its resource's error type, so callers never see a
//! [`FrameworkError`](actor_framework::FrameworkError).

pub mod dish_client;
pub mod order_client;

pub use dish_client::DishClient;
pub use order_client::OrderClient;
