//! # Views
//!
//! What the three screens show, without the rendering: the bar dashboard
//! ([`bar`]), the waiter view ([`waiter`]) and the guest table page ([`table`]).
//! [`board::spawn_board`] keeps a bar or waiter board live.

pub mod bar;
pub mod board;
pub mod table;
pub mod waiter;

pub use bar::*;
pub use board::*;
pub use table::*;
pub use waiter::*;

use crate::alert::AlertPolicy;
use crate::clock::Clock;
use crate::model::{Order, OrderId};
use std::time::Duration;

/// One order as it appears on a board.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardEntry<P> {
    pub order: Order,
    pub phase: P,
    /// `HH:MM` of the order timestamp.
    pub time: String,
    pub age: Duration,
}

/// A rendered board: live orders, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct Board<P> {
    pub entries: Vec<BoardEntry<P>>,
    /// Something new arrived that the viewer should be told about.
    pub alert: bool,
}

impl<P> Board<P> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> Vec<OrderId> {
        self.entries.iter().map(|entry| entry.order.id).collect()
    }
}

/// Turns a store snapshot into a board. Views may keep state between renders.
pub trait BoardView: Send + 'static {
    type Phase: AlertPolicy;

    fn render(&mut self, orders: &[Order], clock: &dyn Clock) -> Board<Self::Phase>;
}

/// Classifies `orders`, drops the expired ones and sorts newest first.
fn live_entries<'a, P: AlertPolicy>(
    orders: impl IntoIterator<Item = &'a Order>,
    clock: &dyn Clock,
) -> Vec<BoardEntry<P>> {
    let now = clock.now_millis();
    let mut entries: Vec<BoardEntry<P>> = orders
        .into_iter()
        .filter_map(|order| {
            let age = order.age(now);
            let phase = P::classify(age);
            (!phase.is_expired()).then(|| BoardEntry {
                order: order.clone(),
                phase,
                time: clock.format_time(order.timestamp),
                age,
            })
        })
        .collect();
    // Ties on the timestamp: the later id was submitted later.
    entries.sort_by(|a, b| {
        b.order
            .timestamp
            .cmp(&a.order.timestamp)
            .then_with(|| b.order.id.cmp(&a.order.id))
    });
    entries
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::catalog::{table_code, TableNumber};
    use crate::model::{Order, OrderId, OrderKind, OrderLine};
    use rust_decimal::Decimal;

    pub fn order(id: u32, table: u32, timestamp: i64) -> Order {
        let table_number = TableNumber::new(table).unwrap();
        Order {
            id: OrderId(id),
            table_number,
            table_code: table_code(table_number).to_string(),
            kind: OrderKind::Order,
            items: vec![OrderLine {
                name: "Pils".into(),
                price: Decimal::new(300, 2),
                quantity: 1,
            }],
            total: Some(Decimal::new(300, 2)),
            timestamp,
            status: "new".into(),
            ordered_by: None,
        }
    }
}
