//! # Live Snapshots
//!
//! A [`Subscription`] follows the full contents of one `ResourceActor`. It is the
//! in-process equivalent of listening on a realtime database path: every
//! successful mutation yields a new complete snapshot, never a diff.

use crate::error::FrameworkError;
use std::sync::Arc;
use tokio::sync::watch;

/// Complete, ordered contents of a collection at one point in time.
pub type Snapshot<T> = Arc<Vec<T>>;

/// Receives successive snapshots of a collection.
///
/// Snapshots are coalesced: a slow reader only sees the latest state, which is
/// what a view re-rendering from the whole collection needs.
pub struct Subscription<T> {
    receiver: watch::Receiver<Snapshot<T>>,
}

impl<T> Subscription<T> {
    pub(crate) fn new(mut receiver: watch::Receiver<Snapshot<T>>) -> Self {
        // The current value is handed out by `current()`; only later ones count as changes.
        receiver.borrow_and_update();
        Self { receiver }
    }

    /// The most recently published snapshot.
    pub fn current(&self) -> Snapshot<T> {
        self.receiver.borrow().clone()
    }

    /// Waits for the next snapshot.
    ///
    /// Fails with [`FrameworkError::ActorClosed`] once the actor has shut down.
    pub async fn changed(&mut self) -> Result<Snapshot<T>, FrameworkError> {
        self.receiver
            .changed()
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        Ok(self.receiver.borrow_and_update().clone())
    }
}

impl<T> Clone for Subscription<T> {
    fn clone(&self) -> Self {
        Self {
            receiver: self.receiver.clone(),
        }
    }
}
