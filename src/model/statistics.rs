//! Running totals of everything the bar has dismissed.

use crate::catalog::TableNumber;
use crate::model::Order;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTotal {
    pub quantity: u64,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableStatistics {
    pub table_number: TableNumber,
    pub total_orders: u64,
    pub total_amount: Decimal,
    pub items: BTreeMap<String, ItemTotal>,
}

impl TableStatistics {
    fn new(table_number: TableNumber) -> Self {
        Self {
            table_number,
            total_orders: 0,
            total_amount: Decimal::ZERO,
            items: BTreeMap::new(),
        }
    }
}

/// The shared `statistics` document. It only ever grows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub tables: BTreeMap<TableNumber, TableStatistics>,
    pub total_amount: Decimal,
    pub total_orders: u64,
    pub item_totals: BTreeMap<String, ItemTotal>,
}

impl Statistics {
    /// Folds a dismissed order into the totals.
    ///
    /// Waiter calls are not counted; returns whether anything changed.
    pub fn record(&mut self, order: &Order) -> bool {
        if order.is_waiter_call() {
            return false;
        }

        let total = order.total.unwrap_or_default();
        let table = self
            .tables
            .entry(order.table_number)
            .or_insert_with(|| TableStatistics::new(order.table_number));
        table.total_orders += 1;
        table.total_amount += total;

        for line in &order.items {
            let amount = line.amount();
            let quantity = u64::from(line.quantity);

            let per_table = table.items.entry(line.name.clone()).or_default();
            per_table.quantity += quantity;
            per_table.amount += amount;

            let global = self.item_totals.entry(line.name.clone()).or_default();
            global.quantity += quantity;
            global.amount += amount;
        }

        self.total_orders += 1;
        self.total_amount += total;
        true
    }

    /// Most ordered items first.
    pub fn top_items(&self) -> Vec<(&str, &ItemTotal)> {
        let mut items: Vec<_> = self
            .item_totals
            .iter()
            .map(|(name, total)| (name.as_str(), total))
            .collect();
        items.sort_by(|a, b| b.1.quantity.cmp(&a.1.quantity).then_with(|| a.0.cmp(b.0)));
        items
    }

    /// Tables with the highest turnover first.
    pub fn tables_by_amount(&self) -> Vec<&TableStatistics> {
        let mut tables: Vec<_> = self.tables.values().collect();
        tables.sort_by(|a, b| {
            b.total_amount
                .cmp(&a.total_amount)
                .then_with(|| a.table_number.cmp(&b.table_number))
        });
        tables
    }

    pub fn table(&self, table_number: TableNumber) -> Option<&TableStatistics> {
        self.tables.get(&table_number)
    }
}
