//! # Waiter View
//!
//! A waiter sees only the tables in their profile, under the waiter policy.

use super::{live_entries, spawn_board, Board, BoardView};
use crate::alert::WaiterPhase;
use crate::catalog::{table_code, TableNumber};
use crate::clients::OrderClient;
use crate::clock::Clock;
use crate::model::{Order, OrderId};
use crate::order_actor::OrderError;
use crate::profile::WaiterProfile;
use crate::submission::Basket;
use actor_framework::ActorClient;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, instrument};

/// Board for one waiter.
///
/// Raises `alert` when an order appears that was not on the previous board and
/// that the waiter did not place themselves. The first render never alerts.
#[derive(Debug, Clone)]
pub struct WaiterBoard {
    profile: WaiterProfile,
    seen: HashSet<OrderId>,
    rendered: bool,
}

impl WaiterBoard {
    pub fn new(profile: WaiterProfile) -> Self {
        Self {
            profile,
            seen: HashSet::new(),
            rendered: false,
        }
    }
}

impl BoardView for WaiterBoard {
    type Phase = WaiterPhase;

    fn render(&mut self, orders: &[Order], clock: &dyn Clock) -> Board<WaiterPhase> {
        let entries = live_entries(
            orders.iter().filter(|order| self.profile.serves(order.table_number)),
            clock,
        );

        let fresh = entries.iter().any(|entry| {
            !self.seen.contains(&entry.order.id) && !entry.order.ordered_by_waiter(&self.profile.name)
        });
        let alert = self.rendered && fresh;

        // Expired orders never come back, so only the visible ones need remembering.
        self.seen = entries.iter().map(|entry| entry.order.id).collect();
        self.rendered = true;

        Board { entries, alert }
    }
}

#[derive(Clone)]
pub struct WaiterView {
    orders: OrderClient,
    profile: WaiterProfile,
}

impl WaiterView {
    pub fn new(orders: OrderClient, profile: WaiterProfile) -> Self {
        Self { orders, profile }
    }

    pub fn profile(&self) -> &WaiterProfile {
        &self.profile
    }

    /// The board as of now, without alert history.
    pub async fn board(&self, clock: &dyn Clock) -> Result<Board<WaiterPhase>, OrderError> {
        let orders = self.orders.list().await?;
        Ok(WaiterBoard::new(self.profile.clone()).render(&orders, clock))
    }

    pub fn live(
        &self,
        clock: Arc<dyn Clock>,
        refresh: Duration,
    ) -> (mpsc::Receiver<Board<WaiterPhase>>, JoinHandle<()>) {
        spawn_board(
            self.orders.subscribe(),
            WaiterBoard::new(self.profile.clone()),
            clock,
            refresh,
        )
    }

    #[instrument(skip(self), fields(waiter = %self.profile.name))]
    pub async fn dismiss(&self, id: OrderId) -> Result<(), OrderError> {
        self.orders.dismiss(id).await
    }

    /// Places an order at a table on a guest's behalf, stamped with the waiter's name.
    ///
    /// The basket is cleared once the order is stored.
    #[instrument(skip(self, basket, clock), fields(waiter = %self.profile.name))]
    pub async fn submit_for_guest(
        &self,
        table: TableNumber,
        basket: &mut Basket,
        clock: &dyn Clock,
    ) -> Result<OrderId, OrderError> {
        let params = basket.into_order(
            table,
            table_code(table),
            clock.now_millis(),
            Some(&self.profile.name),
        )?;
        let id = self.orders.submit(params).await?;
        basket.clear();
        info!(order_id = %id, table = %table, "Order placed by waiter");
        Ok(id)
    }
}
