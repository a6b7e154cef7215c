//! # Order Actor
//!
//! Owns every live order under `orders/`.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! The actor runs with a [`StatisticsClient`](crate::clients::StatisticsClient) as its
//! context. Dismissing an order (a delete) first records it through that client; the
//! order is only removed once the statistics actor has confirmed the increment.
//!
//! ```rust
//! use karneval::catalog::TableNumber;
//! use karneval::clients::{OrderClient, StatisticsClient};
//! use karneval::model::{OrderCreate, OrderedItem};
//! use karneval::{order_actor, statistics_actor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (stats_actor, stats) = statistics_actor::new(8);
//!     let (actor, orders) = order_actor::new(8);
//!     tokio::spawn(stats_actor.run(()));
//!
//!     let statistics = StatisticsClient::open(stats).await?;
//!     tokio::spawn(actor.run(statistics.clone()));
//!     let orders = OrderClient::new(orders);
//!
//!     let table = TableNumber::new(7)?;
//!     let pils = OrderedItem::new("pils", 2);
//!     let id = orders.submit(OrderCreate::order(table, "W28G", vec![pils], 0)).await?;
//!
//!     orders.dismiss(id).await?;
//!     let totals = statistics.snapshot().await?;
//!     assert_eq!(totals.total_orders, 1);
//!     assert_eq!(totals.total_amount.to_string(), "6.00");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Order;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size)
}
