//! Guest-side basket, turned into an [`OrderCreate`] on submission.
//!
//! Names and prices are looked up in the static menu here, so an order never
//! carries a price the guest could have chosen.

use crate::catalog::{item_by_id, TableNumber};
use crate::model::{OrderCreate, OrderLine, OrderedItem};
use crate::order_actor::OrderError;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Item id to count. Counts never go below zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Basket {
    counts: BTreeMap<String, u32>,
}

impl Basket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item_id: &str) -> u32 {
        let count = self.counts.entry(item_id.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    /// Takes one away; removing from an empty slot is a no-op.
    pub fn remove(&mut self, item_id: &str) -> u32 {
        match self.counts.get_mut(item_id) {
            Some(count) if *count > 1 => {
                *count -= 1;
                *count
            }
            Some(_) => {
                self.counts.remove(item_id);
                0
            }
            None => 0,
        }
    }

    pub fn set(&mut self, item_id: &str, count: u32) {
        if count == 0 {
            self.counts.remove(item_id);
        } else {
            self.counts.insert(item_id.to_string(), count);
        }
    }

    pub fn count(&self, item_id: &str) -> u32 {
        self.counts.get(item_id).copied().unwrap_or(0)
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    pub fn total_quantity(&self) -> u64 {
        self.counts.values().map(|count| u64::from(*count)).sum()
    }

    pub fn is_empty(&self) -> bool {
        !self.counts.values().any(|count| *count > 0)
    }

    /// Order lines in menu-id order, priced from the menu.
    pub fn lines(&self) -> Result<Vec<OrderLine>, OrderError> {
        self.counts
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(id, count)| {
                let item = item_by_id(id).ok_or_else(|| OrderError::UnknownMenuItem(id.clone()))?;
                Ok(OrderLine {
                    name: item.name.to_string(),
                    price: item.price(),
                    quantity: *count,
                })
            })
            .collect()
    }

    pub fn total(&self) -> Result<Decimal, OrderError> {
        Ok(self.lines()?.iter().map(OrderLine::amount).sum())
    }

    /// Builds the create payload. An empty basket or an id that is not on the
    /// menu is rejected before any request is made; the store prices the order.
    pub fn into_order(
        &self,
        table_number: TableNumber,
        table_code: &str,
        timestamp: i64,
        ordered_by: Option<&str>,
    ) -> Result<OrderCreate, OrderError> {
        if self.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        let items = self
            .counts
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(id, count)| match item_by_id(id) {
                Some(_) => Ok(OrderedItem::new(id.as_str(), *count)),
                None => Err(OrderError::UnknownMenuItem(id.clone())),
            })
            .collect::<Result<Vec<_>, _>>()?;
        let params = OrderCreate::order(table_number, table_code, items, timestamp);
        Ok(match ordered_by {
            Some(waiter) => params.ordered_by(waiter),
            None => params,
        })
    }
}
