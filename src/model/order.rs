//! A guest order or a waiter call, as stored under `orders/{id}`.
//!
//! [`Order`] implements [`ActorEntity`](actor_framework::ActorEntity) in
//! [`crate::order_actor::entity`]: creation computes the total from the lines, and
//! dismissal records the order into the statistics before it is removed.

use crate::catalog::TableNumber;
use crate::clock::age_at;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::time::Duration;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderKind {
    Order,
    WaiterCall,
}

/// One line of an order: a menu item name at the price it had when ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl OrderLine {
    pub fn amount(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub table_number: TableNumber,
    pub table_code: String,
    #[serde(rename = "type")]
    pub kind: OrderKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<OrderLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<Decimal>,
    /// Creation time, epoch milliseconds.
    pub timestamp: i64,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordered_by: Option<String>,
}

impl Order {
    pub fn is_waiter_call(&self) -> bool {
        self.kind == OrderKind::WaiterCall
    }

    pub fn age(&self, now_ms: i64) -> Duration {
        age_at(self.timestamp, now_ms)
    }

    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Whether `waiter` placed this order on a guest's behalf.
    pub fn ordered_by_waiter(&self, waiter: &str) -> bool {
        self.ordered_by.as_deref() == Some(waiter)
    }
}

/// A menu item id and how many of it were ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedItem {
    pub item_id: String,
    pub quantity: u32,
}

impl OrderedItem {
    pub fn new(item_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            item_id: item_id.into(),
            quantity,
        }
    }
}

/// Payload for submitting a new order or waiter call.
///
/// Only menu ids and quantities travel; names, prices and the total are filled
/// in by the store from the menu.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCreate {
    pub table_number: TableNumber,
    pub table_code: String,
    pub kind: OrderKind,
    pub items: Vec<OrderedItem>,
    pub timestamp: i64,
    pub ordered_by: Option<String>,
}

impl OrderCreate {
    pub fn order(
        table_number: TableNumber,
        table_code: impl Into<String>,
        items: Vec<OrderedItem>,
        timestamp: i64,
    ) -> Self {
        Self {
            table_number,
            table_code: table_code.into(),
            kind: OrderKind::Order,
            items,
            timestamp,
            ordered_by: None,
        }
    }

    pub fn waiter_call(
        table_number: TableNumber,
        table_code: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        Self {
            table_number,
            table_code: table_code.into(),
            kind: OrderKind::WaiterCall,
            items: Vec::new(),
            timestamp,
            ordered_by: None,
        }
    }

    pub fn ordered_by(mut self, waiter: impl Into<String>) -> Self {
        self.ordered_by = Some(waiter.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cola_order() -> Order {
        Order {
            id: OrderId(3),
            table_number: TableNumber::new(7).unwrap(),
            table_code: "W28G".into(),
            kind: OrderKind::Order,
            items: vec![OrderLine {
                name: "Cola".into(),
                price: Decimal::new(250, 2),
                quantity: 2,
            }],
            total: Some(Decimal::new(500, 2)),
            timestamp: 1_000,
            status: "new".into(),
            ordered_by: Some("Anna".into()),
        }
    }

    #[test]
    fn order_id_renders_with_prefix() {
        assert_eq!(OrderId(12).to_string(), "order_12");
    }

    #[test]
    fn serialises_with_store_field_names() {
        let json = serde_json::to_value(cola_order()).unwrap();
        assert_eq!(json["tableNumber"], 7);
        assert_eq!(json["tableCode"], "W28G");
        assert_eq!(json["type"], "order");
        assert_eq!(json["orderedBy"], "Anna");
        assert_eq!(json["items"][0]["quantity"], 2);
    }

    #[test]
    fn waiter_calls_omit_items_and_total() {
        let mut call = cola_order();
        call.kind = OrderKind::WaiterCall;
        call.items.clear();
        call.total = None;
        call.ordered_by = None;

        let json = serde_json::to_value(&call).unwrap();
        assert_eq!(json["type"], "waiter_call");
        assert!(json.get("items").is_none());
        assert!(json.get("total").is_none());
        assert!(json.get("orderedBy").is_none());

        let back: Order = serde_json::from_value(json).unwrap();
        assert_eq!(back, call);
    }

    #[test]
    fn line_amount_and_age() {
        let order = cola_order();
        assert_eq!(order.items[0].amount(), Decimal::new(500, 2));
        assert_eq!(order.item_count(), 2);
        assert_eq!(order.age(66_000), Duration::from_secs(65));
        assert!(order.ordered_by_waiter("Anna"));
        assert!(!order.ordered_by_waiter("Ben"));
    }
}
