//! Entity trait implementation for the Order domain type.
//!
//! See the trait implementation on [`Order`] for method documentation.

use super::error::OrderError;
use crate::catalog::item_by_id;
use crate::clients::StatisticsClient;
use crate::model::{Order, OrderCreate, OrderId, OrderKind, OrderLine};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::convert::Infallible;
use tracing::{debug, info};

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = Infallible; // orders are immutable once placed
    type Action = Infallible;
    type ActionResult = ();
    type Context = StatisticsClient;
    type Error = OrderError;

    /// Builds the stored order.
    ///
    /// Names and prices come from the menu, never from the caller. Zero-quantity
    /// entries are dropped, an unknown id is [`OrderError::UnknownMenuItem`] and an
    /// order without any remaining line is [`OrderError::EmptyOrder`]. Waiter calls
    /// never carry lines or a total.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        let (items, total) = match params.kind {
            OrderKind::Order => {
                let items = params
                    .items
                    .into_iter()
                    .filter(|entry| entry.quantity > 0)
                    .map(|entry| {
                        let item = item_by_id(&entry.item_id)
                            .ok_or(OrderError::UnknownMenuItem(entry.item_id))?;
                        Ok(OrderLine {
                            name: item.name.to_string(),
                            price: item.price(),
                            quantity: entry.quantity,
                        })
                    })
                    .collect::<Result<Vec<_>, OrderError>>()?;
                if items.is_empty() {
                    return Err(OrderError::EmptyOrder);
                }
                let total: Decimal = items.iter().map(OrderLine::amount).sum();
                (items, Some(total))
            }
            OrderKind::WaiterCall => (Vec::new(), None),
        };

        Ok(Self {
            id,
            table_number: params.table_number,
            table_code: params.table_code,
            kind: params.kind,
            items,
            total,
            timestamp: params.timestamp,
            status: "new".to_string(),
            ordered_by: params.ordered_by,
        })
    }

    async fn on_create(&mut self, _ctx: &StatisticsClient) -> Result<(), Self::Error> {
        info!(
            order_id = %self.id,
            table = %self.table_number,
            kind = ?self.kind,
            total = ?self.total,
            "New order"
        );
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: Infallible,
        _ctx: &StatisticsClient,
    ) -> Result<(), Self::Error> {
        match update {}
    }

    /// Dismissal: fold an `order` into the statistics before it disappears.
    ///
    /// Waiter calls are removed without touching the statistics. If recording
    /// fails the error is returned and the actor keeps the order.
    async fn on_delete(&self, statistics: &StatisticsClient) -> Result<(), Self::Error> {
        if self.is_waiter_call() {
            debug!(order_id = %self.id, "Waiter call dismissed");
            return Ok(());
        }
        statistics.record(self.clone()).await?;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: Infallible,
        _ctx: &StatisticsClient,
    ) -> Result<(), Self::Error> {
        match action {}
    }
}
