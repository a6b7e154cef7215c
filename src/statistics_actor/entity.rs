//! Entity trait implementation for the statistics document.

use super::actions::StatisticsAction;
use super::error::StatisticsError;
use crate::model::{DocumentId, Statistics};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::convert::Infallible;
use tracing::debug;

#[async_trait]
impl ActorEntity for Statistics {
    type Id = DocumentId;
    /// Starting totals, normally empty.
    type Create = Statistics;
    type Update = Infallible;
    type Action = StatisticsAction;
    type ActionResult = bool;
    type Context = ();
    type Error = StatisticsError;

    fn from_create_params(_id: DocumentId, seed: Statistics) -> Result<Self, Self::Error> {
        Ok(seed)
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }

    /// # Actions
    /// - `Record`: applies one dismissed order; the only way the totals change.
    async fn handle_action(
        &mut self,
        action: StatisticsAction,
        _ctx: &(),
    ) -> Result<bool, Self::Error> {
        match action {
            StatisticsAction::Record(order) => {
                let changed = self.record(&order);
                debug!(
                    order_id = %order.id,
                    table = %order.table_number,
                    changed,
                    total_orders = self.total_orders,
                    "Recorded"
                );
                Ok(changed)
            }
        }
    }
}
