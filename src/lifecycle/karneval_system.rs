use crate::clients::{OrderClient, SettingsClient, StatisticsClient};
use crate::clock::Clock;
use crate::config::Config;
use crate::profile::WaiterProfile;
use crate::settings_actor::SettingsError;
use crate::statistics_actor::StatisticsError;
use crate::views::{BarDashboard, GuestSession, WaiterView};
use crate::{order_actor, settings_actor, statistics_actor};
use actor_framework::ActorClient;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Failed to open statistics: {0}")]
    Statistics(#[from] StatisticsError),

    #[error("Failed to open settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("Actor task failed: {0}")]
    TaskFailed(String),
}

/// The running system: order, statistics and settings actors plus their clients.
///
/// # Example
///
/// ```rust
/// use karneval::config::Config;
/// use karneval::lifecycle::KarnevalSystem;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = KarnevalSystem::start(&Config::default()).await?;
///     let stats = system.statistics_client.snapshot().await?;
///     assert_eq!(stats.total_orders, 0);
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct KarnevalSystem {
    pub order_client: OrderClient,
    pub statistics_client: StatisticsClient,
    pub settings_client: SettingsClient,
    base_url: String,
    handles: Vec<JoinHandle<()>>,
}

impl KarnevalSystem {
    /// Spawns the actors and creates the two singleton documents.
    pub async fn start(config: &Config) -> Result<Self, LifecycleError> {
        let buffer = config.channel_buffer;

        // 1. Actors without dependencies
        let (stats_actor, stats) = statistics_actor::new(buffer);
        let (settings_actor, settings) = settings_actor::new(buffer);
        let stats_handle = tokio::spawn(stats_actor.run(()));
        let settings_handle = tokio::spawn(settings_actor.run(()));

        let statistics_client = StatisticsClient::open(stats).await?;
        let settings_client = SettingsClient::open(settings, config.admin_pin.clone()).await?;

        // 2. The order actor records dismissals through the statistics client
        let (order_actor, orders) = order_actor::new(buffer);
        let order_handle = tokio::spawn(order_actor.run(statistics_client.clone()));

        info!(
            base_url = %config.base_url,
            statistics = %statistics_client.id(),
            "Karneval system started"
        );

        Ok(Self {
            order_client: OrderClient::new(orders),
            statistics_client,
            settings_client,
            base_url: config.base_url.clone(),
            // The order actor goes first: it holds a statistics client.
            handles: vec![order_handle, stats_handle, settings_handle],
        })
    }

    pub fn bar_dashboard(&self) -> BarDashboard {
        BarDashboard::new(
            self.order_client.clone(),
            self.statistics_client.clone(),
            self.settings_client.clone(),
            self.base_url.clone(),
        )
    }

    pub fn waiter_view(&self, profile: WaiterProfile) -> WaiterView {
        WaiterView::new(self.order_client.clone(), profile)
    }

    /// A guest opening `/tisch/{code}`.
    pub fn guest_session(&self, code: &str, clock: Arc<dyn Clock>) -> GuestSession {
        GuestSession::new(
            code,
            self.order_client.clone(),
            self.settings_client.subscribe(),
            clock,
        )
    }

    /// Drops the clients and waits for every actor to finish.
    ///
    /// Hangs if a view or session created from this system is still alive.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.statistics_client);
        drop(self.settings_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(LifecycleError::TaskFailed(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
