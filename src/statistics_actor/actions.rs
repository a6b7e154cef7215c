//! Custom actions for the Statistics actor.

use crate::model::Order;

#[derive(Debug, Clone)]
pub enum StatisticsAction {
    /// Fold a dismissed order into the totals.
    ///
    /// Answers `true` when the totals changed, `false` for waiter calls.
    Record(Box<Order>),
}
