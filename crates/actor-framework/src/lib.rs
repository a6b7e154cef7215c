//! # Actor Framework
//!
//! Building blocks for type-safe, concurrent document stores on top of the **Actor Model**.
//! Each collection of documents (orders, statistics, settings) is owned by one
//! [`ResourceActor`] task; everything else talks to it through a cloneable
//! [`ResourceClient`].
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]): the document type and its lifecycle hooks
//! 2. **Runtime Layer** ([`ResourceActor`]): sequential message processing
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]): request/response plus
//!    live [`Subscription`]s
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task and handles **one message at a time**, so a
//!   read-modify-write inside a hook can never interleave with another one on the same
//!   collection. No locks are needed.
//! - Different actors run in parallel. When one document needs another (an order
//!   recording itself into the statistics), its hook sends a message to the other actor.
//! - After each successful mutation the actor publishes the full collection. Subscribers
//!   receive the latest complete snapshot and never a partial one.
//!
//! ## Context Injection Pattern
//!
//! Dependencies are handed over in `run()`, not at construction:
//!
//! ```rust
//! use actor_framework::{ActorEntity, FrameworkError, ResourceActor, ResourceClient};
//! use async_trait::async_trait;
//! use std::convert::Infallible;
//!
//! #[derive(Clone, Debug)] struct Ledger { id: u32, entries: u32 }
//! #[derive(Debug)] struct LedgerCreate;
//! #[derive(Debug)] enum LedgerAction { Book }
//! #[derive(Debug, thiserror::Error)] #[error("ledger error")] struct LedgerError;
//!
//! #[async_trait]
//! impl ActorEntity for Ledger {
//!     type Id = u32; type Create = LedgerCreate; type Update = Infallible; type Action = LedgerAction;
//!     type ActionResult = (); type Context = (); type Error = LedgerError;
//!     fn from_create_params(id: u32, _: LedgerCreate) -> Result<Self, Self::Error> { Ok(Self { id, entries: 0 }) }
//!     async fn on_update(&mut self, u: Infallible, _: &()) -> Result<(), Self::Error> { match u {} }
//!     async fn handle_action(&mut self, _: LedgerAction, _: &()) -> Result<(), Self::Error> {
//!         self.entries += 1;
//!         Ok(())
//!     }
//! }
//!
//! #[derive(Clone, Debug)] struct Slip { id: u32 }
//! #[derive(Debug)] struct SlipCreate;
//! #[derive(Debug, thiserror::Error)]
//! enum SlipError {
//!     #[error("ledger unavailable: {0}")]
//!     Ledger(#[from] FrameworkError),
//! }
//!
//! #[async_trait]
//! impl ActorEntity for Slip {
//!     type Id = u32; type Create = SlipCreate; type Update = Infallible; type Action = Infallible;
//!     type ActionResult = (); type Context = ResourceClient<Ledger>; type Error = SlipError;
//!     fn from_create_params(id: u32, _: SlipCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, u: Infallible, _: &Self::Context) -> Result<(), Self::Error> { match u {} }
//!     async fn handle_action(&mut self, a: Infallible, _: &Self::Context) -> Result<(), Self::Error> { match a {} }
//!     // Removing a slip books it into the ledger first.
//!     async fn on_delete(&self, ledger: &Self::Context) -> Result<(), Self::Error> {
//!         ledger.perform_action(1, LedgerAction::Book).await?;
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (ledger_actor, ledger) = ResourceActor::<Ledger>::new(10);
//!     let (slip_actor, slips) = ResourceActor::<Slip>::new(10);
//!
//!     tokio::spawn(ledger_actor.run(()));
//!     tokio::spawn(slip_actor.run(ledger.clone()));
//!
//!     ledger.create(LedgerCreate).await.unwrap();
//!     let slip = slips.create(SlipCreate).await.unwrap();
//!     slips.delete(slip).await.unwrap();
//!     assert_eq!(ledger.get(1).await.unwrap().unwrap().entries, 1);
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from scripted expectations and can publish
//! snapshots by hand, so an actor can be tested against a fake dependency.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod subscription;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use subscription::{Snapshot, Subscription};
