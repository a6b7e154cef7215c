//! # Bar Dashboard
//!
//! The bar sees every live order under the bar policy, dismisses them, reads
//! the statistics and owns the two PIN-gated switches.

use super::{live_entries, spawn_board, Board, BoardView};
use crate::alert::BarPhase;
use crate::catalog::waiter_url;
use crate::clients::{OrderClient, SettingsClient, StatisticsClient};
use crate::clock::Clock;
use crate::model::{Order, OrderId, Statistics, SystemSettings};
use crate::order_actor::OrderError;
use crate::settings_actor::SettingsError;
use crate::statistics_actor::StatisticsError;
use actor_framework::ActorClient;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::instrument;

/// All non-expired orders, newest first. The bar has no new-order alert.
#[derive(Debug, Clone, Copy, Default)]
pub struct BarBoard;

impl BoardView for BarBoard {
    type Phase = BarPhase;

    fn render(&mut self, orders: &[Order], clock: &dyn Clock) -> Board<BarPhase> {
        Board {
            entries: live_entries(orders, clock),
            alert: false,
        }
    }
}

#[derive(Clone)]
pub struct BarDashboard {
    orders: OrderClient,
    statistics: StatisticsClient,
    settings: SettingsClient,
    base_url: String,
}

impl BarDashboard {
    pub fn new(
        orders: OrderClient,
        statistics: StatisticsClient,
        settings: SettingsClient,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            orders,
            statistics,
            settings,
            base_url: base_url.into(),
        }
    }

    /// The board as of now.
    pub async fn board(&self, clock: &dyn Clock) -> Result<Board<BarPhase>, OrderError> {
        let orders = self.orders.list().await?;
        Ok(BarBoard.render(&orders, clock))
    }

    /// A board that keeps itself up to date. It does not keep the order store alive.
    pub fn live(
        &self,
        clock: Arc<dyn Clock>,
        refresh: Duration,
    ) -> (mpsc::Receiver<Board<BarPhase>>, JoinHandle<()>) {
        spawn_board(self.orders.subscribe(), BarBoard, clock, refresh)
    }

    /// "Erledigt": counts the order into the statistics and removes it.
    #[instrument(skip(self))]
    pub async fn dismiss(&self, id: OrderId) -> Result<(), OrderError> {
        self.orders.dismiss(id).await
    }

    pub async fn statistics(&self) -> Result<Statistics, StatisticsError> {
        self.statistics.snapshot().await
    }

    pub async fn settings(&self) -> Result<SystemSettings, SettingsError> {
        self.settings.current().await
    }

    pub async fn set_shutdown(&self, pin: &str, shutdown: bool) -> Result<SystemSettings, SettingsError> {
        self.settings.set_shutdown(pin, shutdown).await
    }

    pub async fn toggle_order_form(&self, pin: &str) -> Result<bool, SettingsError> {
        self.settings.toggle_order_form(pin).await
    }

    /// Link for the waiters' page, shown on the dashboard.
    pub fn waiter_url(&self) -> String {
        waiter_url(&self.base_url)
    }
}
