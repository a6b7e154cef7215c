//! Live boards: re-render on every store change and on a fixed tick.
//!
//! The tick matters because phases move with time alone: an order turns from
//! red to orange without anything in the store changing.

use super::{Board, BoardView};
use crate::clock::Clock;
use crate::model::Order;
use actor_framework::Subscription;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

/// Spawns a task that renders `view` into boards.
///
/// An initial board is sent right away. The task stops when the order store shuts
/// down or the receiver is dropped.
pub fn spawn_board<V: BoardView>(
    mut feed: Subscription<Order>,
    mut view: V,
    clock: Arc<dyn Clock>,
    refresh: Duration,
) -> (mpsc::Receiver<Board<V::Phase>>, JoinHandle<()>) {
    let (sender, receiver) = mpsc::channel(8);

    let handle = tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + refresh, refresh);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut orders = feed.current();

        loop {
            let board = view.render(&orders, clock.as_ref());
            debug!(orders = board.len(), alert = board.alert, "Board rendered");
            if sender.send(board).await.is_err() {
                debug!("Board receiver dropped");
                break;
            }

            tokio::select! {
                changed = feed.changed() => match changed {
                    Ok(snapshot) => orders = snapshot,
                    Err(_) => {
                        info!("Order store closed, stopping board");
                        break;
                    }
                },
                _ = ticker.tick() => {}
            }
        }
    });

    (receiver, handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::BarPhase;
    use crate::clock::ManualClock;
    use crate::views::fixtures::order;
    use crate::views::BarBoard;
    use actor_framework::mock::MockClient;

    #[tokio::test(start_paused = true)]
    async fn test_board_follows_changes_and_ticks() {
        let mock = MockClient::<Order>::new();
        let clock = ManualClock::new(0);
        let (mut boards, handle) = spawn_board(
            mock.client().subscribe(),
            BarBoard,
            Arc::new(clock.clone()),
            Duration::from_secs(10),
        );

        let first = boards.recv().await.unwrap();
        assert!(first.is_empty());

        mock.publish(vec![order(1, 7, 0)]);
        let second = boards.recv().await.unwrap();
        assert_eq!(second.entries[0].phase, BarPhase::RedBlink);

        // No store change, only time.
        clock.advance(Duration::from_secs(65));
        let third = boards.recv().await.unwrap();
        assert_eq!(third.entries[0].phase, BarPhase::RedSolid);

        drop(mock);
        assert!(boards.recv().await.is_none());
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_board_stops_when_receiver_dropped() {
        let mock = MockClient::<Order>::new();
        let (boards, handle) = spawn_board(
            mock.client().subscribe(),
            BarBoard,
            Arc::new(ManualClock::new(0)),
            Duration::from_secs(10),
        );
        drop(boards);
        handle.await.unwrap();
    }
}
