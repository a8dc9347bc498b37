//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource (Order, Dish, …) must
//! implement to be managed by the generic `ResourceActor`. It specifies associated types for
//! IDs, DTOs, context, and errors, and provides lifecycle hooks (`on_create`, `on_update`,
//! `on_delete`).
//!
//! # Architecture Note
//! By defining a contract that all resource types must satisfy, the `ResourceActor` loop is
//! written *once* and reused everywhere. Associated types keep the payloads apart: an
//! `Order` actor only accepts `OrderCreate`, and a `DishCreate` sent to it will not compile.
//!
//! # Validation lives in the hooks
//! The actor resolves the record by id before calling `on_update` / `on_delete`, and it
//! processes one request at a time. A hook that validates and then mutates `self` therefore
//! runs atomically with respect to every other request for the same store.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! The default implementations do nothing (`Ok(())`).

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks.
/// It also defines a `Context` type, which is injected into every hook. This allows "Late Binding"
/// of dependencies (passing clients to `run()` instead of `new()`).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g., String, Uuid, u64).
    type Id: Eq + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per entity rather than one per operation: clients deal with a single
    /// error type and match on its variants.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier the record is stored under. Never changes after creation.
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create` and is the place to reject
    /// malformed payloads.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called on the stored record when an update request is received.
    /// Returning an error leaves the record untouched only if the hook did not mutate
    /// `self` before failing.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed. An error vetoes the removal.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
