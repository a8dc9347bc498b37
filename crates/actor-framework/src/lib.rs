//! # Actor Framework
//!
//! This crate provides the building blocks for managing collections of stateful records
//! behind actors. It implements a **Resource-Oriented Architecture (ROA)** pattern on top of
//! the **Actor Model**: every resource type gets one actor that owns its store, and every
//! create, read, list, update and delete goes through that actor's mailbox.
//!
//! ## Why an actor per store?
//!
//! - Isolated state (no shared memory, no locks)
//! - Message-passing concurrency
//! - Sequential processing: a request is validated and applied before the next one is
//!   looked at, so two concurrent updates to the same record never interleave
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your business logic and domain models
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing and the ordered store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Ticket {
//!     id: u32,
//!     title: String,
//! }
//!
//! #[derive(Debug)] struct TicketCreate { title: String }
//! #[derive(Debug)] struct TicketUpdate { title: String }
//! #[derive(Debug, thiserror::Error)] #[error("title must not be empty")] struct EmptyTitle;
//!
//! #[async_trait]
//! impl ActorEntity for Ticket {
//!     type Id = u32;
//!     type Create = TicketCreate;
//!     type Update = TicketUpdate;
//!     type Context = ();
//!     type Error = EmptyTitle;
//!
//!     fn id(&self) -> &u32 { &self.id }
//!
//!     fn from_create_params(id: u32, params: TicketCreate) -> Result<Self, Self::Error> {
//!         if params.title.is_empty() { return Err(EmptyTitle); }
//!         Ok(Self { id, title: params.title })
//!     }
//!
//!     async fn on_update(&mut self, update: TicketUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         if update.title.is_empty() { return Err(EmptyTitle); }
//!         self.title = update.title;
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut counter = 0;
//!     let (actor, client) = ResourceActor::<Ticket>::new(10, move || { counter += 1; counter });
//!     tokio::spawn(actor.run(()));
//!
//!     let ticket = client.create(TicketCreate { title: "Fix fryer".into() }).await.unwrap();
//!     assert!(client.create(TicketCreate { title: String::new() }).await.is_err());
//!
//!     let all = client.list().await.unwrap();
//!     assert_eq!(all.len(), 1);
//!     assert_eq!(all[0].title, ticket.title);
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from a queue of expectations instead of a real store,
//! which makes error paths (closed actors, missing records) easy to exercise.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
