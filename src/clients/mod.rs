//! Domain clients wrapping [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each client maps [`FrameworkError`](actor_framework::FrameworkError) back to its
//! domain error, so callers match on `OrderError::EmptyOrder` rather than on a
//! boxed entity error.

pub mod order_client;
pub mod settings_client;
pub mod statistics_client;

pub use order_client::*;
pub use settings_client::*;
pub use statistics_client::*;
