//! # Karneval
//!
//! Drink ordering for a carnival hall: guests order from a QR code on their
//! table, the bar sees every order with an urgency colour, and waiters follow
//! the tables they serve.
//!
//! ## Architecture
//!
//! Shared state lives in three actors built on [`actor_framework`]:
//!
//! - **orders** ([`order_actor`]): every live order and waiter call.
//! - **statistics** ([`statistics_actor`]): running totals, fed only by dismissals.
//! - **settings** ([`settings_actor`]): the emergency stop and the order-form lock.
//!
//! Each actor processes its requests one at a time, so concurrent dismissals can
//! never lose a statistics increment. Every change is published as a full
//! snapshot that the live views subscribe to.
//!
//! ## Module Tour
//!
//! - [`catalog`]: the static menu and the 44 table codes.
//! - [`model`]: the stored documents.
//! - [`alert`]: age to urgency phase, separately for bar and waiters.
//! - [`clients`]: typed clients in front of the actors.
//! - [`submission`]: the guest basket.
//! - [`views`]: bar dashboard, waiter view and guest table page.
//! - [`profile`]: a waiter's name and tables, stored on their device.
//! - [`lifecycle`]: starting and stopping the system, tracing setup.
//! - [`config`]: environment configuration.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod alert;
pub mod catalog;
pub mod clients;
pub mod clock;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod profile;
pub mod settings_actor;
pub mod statistics_actor;
pub mod submission;
pub mod views;
