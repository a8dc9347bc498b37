//! # Domain Model
//!
//! Plain data for the two resources the service manages. The actor hooks that validate
//! and change them live in [`crate::order_actor`] and [`crate::dish_actor`].

pub mod dish;
pub mod order;

pub use dish::*;
pub use order::*;
