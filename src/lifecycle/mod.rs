//! # System Lifecycle
//!
//! Starting, wiring and stopping the three store actors.
//!
//! ## Wiring
//!
//! Actors are created without dependencies and receive them when they start
//! (`run(context)`). The statistics actor has to be running before the order actor
//! starts, because the order actor's context is a client attached to the
//! statistics document:
//!
//! ```rust,ignore
//! let (stats_actor, stats) = statistics_actor::new(buffer);
//! let stats_handle = tokio::spawn(stats_actor.run(()));
//! let statistics = StatisticsClient::open(stats).await?;
//!
//! let (order_actor, orders) = order_actor::new(buffer);
//! let order_handle = tokio::spawn(order_actor.run(statistics.clone()));
//! ```
//!
//! ## Shutdown
//!
//! An actor stops when the last client holding its sender is dropped.
//! [`KarnevalSystem::shutdown`] drops its own clients and then waits for every
//! task, so views and sessions built from the system must be dropped first.
//! Live boards and subscriptions do not hold a sender and never block shutdown.

pub mod karneval_system;
pub mod tracing;

pub use karneval_system::*;
pub use tracing::setup_tracing;
