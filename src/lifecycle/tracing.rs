//! # Logging
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG` (`info` when unset). Module paths are hidden; actor logs carry
//! an `entity_type` field instead.
//!
//! ```bash
//! # Orders, dismissals and switches
//! RUST_LOG=info cargo run
//!
//! # Every request with its payload
//! RUST_LOG=debug cargo run
//!
//! # Only the framework's actor loop
//! RUST_LOG=actor_framework=debug cargo run
//! ```
//!
//! A dismissal at `info` level reads roughly like this:
//!
//! ```text
//! INFO dismiss{id=OrderId(1)}: Action ok entity_type="Statistics" id=doc_1
//! INFO dismiss{id=OrderId(1)}: Deleted entity_type="Order" id=order_1 size=0
//! INFO dismiss{id=OrderId(1)}: Order dismissed order_id=order_1
//! ```

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// `RUST_LOG`, falling back to [`DEFAULT_LOG_LEVEL`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Installs the global subscriber. Call once, at the start of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .compact()
        .init();
}
