//! # Guest Table Page
//!
//! Reached through `/tisch/{code}`. The page follows the global switches live:
//! the emergency stop takes everything out of service, the order-form lock
//! leaves only the waiter call.

use crate::catalog::{table_code, table_number, TableNumber};
use crate::clients::OrderClient;
use crate::clock::{age_at, Clock};
use crate::model::{OrderCreate, OrderId, OrderLine, SystemSettings};
use crate::order_actor::OrderError;
use crate::submission::Basket;
use actor_framework::{FrameworkError, Subscription};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Guests see their own orders for this long.
pub const HISTORY_WINDOW: Duration = Duration::from_secs(6 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableScreen {
    /// The code does not resolve. The page never gets past this.
    Loading,
    OutOfService,
    /// Order form hidden, waiter call still available.
    WaiterCallOnly,
    Ordering,
}

/// Which screen a table page shows for the given switches.
pub fn table_screen(table: Option<TableNumber>, settings: &SystemSettings) -> TableScreen {
    match table {
        None => TableScreen::Loading,
        Some(_) if settings.shutdown => TableScreen::OutOfService,
        Some(_) if settings.order_form_disabled => TableScreen::WaiterCallOnly,
        Some(_) => TableScreen::Ordering,
    }
}

/// An order this device submitted, kept for the "your orders" list.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmittedOrder {
    pub id: OrderId,
    pub items: Vec<OrderLine>,
    pub total: Decimal,
    pub timestamp: i64,
}

/// One guest device looking at one table page.
pub struct GuestSession {
    code: String,
    table: Option<TableNumber>,
    orders: OrderClient,
    settings: Subscription<SystemSettings>,
    clock: Arc<dyn Clock>,
    history: Vec<SubmittedOrder>,
}

impl GuestSession {
    pub fn new(
        code: &str,
        orders: OrderClient,
        settings: Subscription<SystemSettings>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let table = table_number(code);
        if table.is_none() {
            warn!(code, "Unknown table code");
        }
        Self {
            code: code.to_string(),
            table,
            orders,
            settings,
            clock,
            history: Vec::new(),
        }
    }

    pub fn table(&self) -> Option<TableNumber> {
        self.table
    }

    pub fn settings(&self) -> SystemSettings {
        SystemSettings::from_snapshot(&self.settings.current())
    }

    pub fn screen(&self) -> TableScreen {
        table_screen(self.table, &self.settings())
    }

    /// Waits for the bar to flip a switch and returns the new screen.
    pub async fn settings_changed(&mut self) -> Result<TableScreen, FrameworkError> {
        let snapshot = self.settings.changed().await?;
        Ok(table_screen(self.table, &SystemSettings::from_snapshot(&snapshot)))
    }

    fn resolve(&self) -> Result<TableNumber, OrderError> {
        self.table
            .ok_or_else(|| OrderError::UnknownTable(self.code.clone()))
    }

    /// Sends the basket to the bar. On success the basket is emptied and
    /// history entries past [`HISTORY_WINDOW`] are dropped.
    #[instrument(skip(self, basket), fields(code = %self.code))]
    pub async fn submit(&mut self, basket: &mut Basket) -> Result<OrderId, OrderError> {
        let table = self.resolve()?;
        let settings = self.settings();
        if settings.shutdown {
            return Err(OrderError::ServiceStopped);
        }
        if settings.order_form_disabled {
            return Err(OrderError::OrderFormLocked);
        }

        let now = self.clock.now_millis();
        let params = basket.into_order(table, table_code(table), now, None)?;
        let items = basket.lines()?;

        let id = self.orders.submit(params).await?;
        self.history
            .retain(|order| age_at(order.timestamp, now) < HISTORY_WINDOW);
        self.history.insert(
            0,
            SubmittedOrder {
                id,
                total: items.iter().map(OrderLine::amount).sum(),
                items,
                timestamp: now,
            },
        );
        basket.clear();
        info!(order_id = %id, "Guest order sent");
        Ok(id)
    }

    /// Asks for a waiter. Allowed while the order form is locked.
    #[instrument(skip(self), fields(code = %self.code))]
    pub async fn call_waiter(&self) -> Result<OrderId, OrderError> {
        let table = self.resolve()?;
        if self.settings().shutdown {
            return Err(OrderError::ServiceStopped);
        }
        let params = OrderCreate::waiter_call(table, table_code(table), self.clock.now_millis());
        self.orders.submit(params).await
    }

    /// Own orders younger than [`HISTORY_WINDOW`], newest first.
    pub fn recent_orders(&self) -> Vec<&SubmittedOrder> {
        let now = self.clock.now_millis();
        self.history
            .iter()
            .filter(|order| age_at(order.timestamp, now) < HISTORY_WINDOW)
            .collect()
    }
}
