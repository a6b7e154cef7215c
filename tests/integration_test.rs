use actor_framework::ActorClient;
use karneval::alert::{BarPhase, WaiterPhase};
use karneval::catalog::{table_code, TableNumber};
use karneval::clock::ManualClock;
use karneval::config::Config;
use karneval::lifecycle::KarnevalSystem;
use karneval::model::{OrderCreate, OrderedItem, Statistics};
use karneval::order_actor::OrderError;
use karneval::profile::WaiterProfile;
use karneval::submission::Basket;
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;

// 2024-02-08 19:11:00 UTC
const START: i64 = 1_707_419_460_000;

fn pils(quantity: u32) -> OrderedItem {
    OrderedItem::new("pils", quantity)
}

/// Full end-to-end run with all real actors: order at table 7, watch it age, dismiss it.
#[tokio::test]
async fn test_table_seven_order_to_statistics() {
    let system = KarnevalSystem::start(&Config::default()).await.unwrap();
    let clock = ManualClock::new(START);

    let mut guest = system.guest_session("W28G", Arc::new(clock.clone()));
    let bar = system.bar_dashboard();
    let waiter = system.waiter_view(WaiterProfile::new("Anna", [7]).unwrap());

    let mut basket = Basket::new();
    basket.set("cola", 2);
    basket.add("pils");
    let id = guest.submit(&mut basket).await.expect("Failed to submit order");
    assert!(basket.is_empty());

    let order = system
        .order_client
        .get(id)
        .await
        .expect("Failed to get order")
        .expect("Order not found");
    assert_eq!(order.table_number.get(), 7);
    assert_eq!(order.table_code, "W28G");
    assert_eq!(order.total, Some(Decimal::new(800, 2)));
    assert_eq!(order.status, "new");
    assert_eq!(order.timestamp, START);

    clock.advance(Duration::from_secs(65));
    let bar_board = bar.board(&clock).await.unwrap();
    assert_eq!(bar_board.entries[0].phase, BarPhase::RedSolid);
    assert_eq!(bar_board.entries[0].time, "19:11");
    let waiter_board = waiter.board(&clock).await.unwrap();
    assert_eq!(waiter_board.entries[0].phase, WaiterPhase::Orange);

    clock.advance(Duration::from_secs(5));
    bar.dismiss(id).await.expect("Failed to dismiss");
    assert!(system.order_client.get(id).await.unwrap().is_none());

    let stats = bar.statistics().await.unwrap();
    let table = stats.table(TableNumber::new(7).unwrap()).expect("table 7 missing");
    assert_eq!(table.total_amount, Decimal::new(800, 2));
    assert_eq!(table.total_orders, 1);
    assert_eq!(stats.item_totals["Cola"].quantity, 2);
    assert_eq!(stats.item_totals["Cola"].amount, Decimal::new(500, 2));
    assert_eq!(stats.item_totals["Pils"].quantity, 1);
    assert_eq!(stats.total_amount, Decimal::new(800, 2));

    // The guest still sees their own order.
    assert_eq!(guest.recent_orders().len(), 1);
    clock.advance(Duration::from_secs(6 * 60));
    assert!(guest.recent_orders().is_empty());

    drop((guest, bar, waiter));
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_concurrent_dismissals_keep_every_increment() {
    let system = KarnevalSystem::start(&Config::default()).await.unwrap();

    let mut ids = Vec::new();
    for n in 0..20u32 {
        let table = TableNumber::new(n % 4 + 1).unwrap();
        let params = OrderCreate::order(table, table_code(table), vec![pils(1)], 0);
        ids.push(system.order_client.submit(params).await.unwrap());
    }

    let tasks: Vec<_> = ids
        .into_iter()
        .map(|id| {
            let orders = system.order_client.clone();
            tokio::spawn(async move { orders.dismiss(id).await })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().expect("Dismissal failed");
    }

    let stats = system.statistics_client.snapshot().await.unwrap();
    assert_eq!(stats.total_orders, 20);
    assert_eq!(stats.total_amount, Decimal::from(60));
    assert_eq!(stats.item_totals["Pils"].quantity, 20);
    assert_eq!(stats.tables.len(), 4);
    assert!(stats.tables.values().all(|t| t.total_orders == 5));
    assert!(system.order_client.list().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_second_dismissal_is_not_found() {
    let system = KarnevalSystem::start(&Config::default()).await.unwrap();
    let table = TableNumber::new(3).unwrap();
    let id = system
        .order_client
        .submit(OrderCreate::order(table, table_code(table), vec![pils(2)], 0))
        .await
        .unwrap();

    system.order_client.dismiss(id).await.unwrap();
    assert!(matches!(
        system.order_client.dismiss(id).await,
        Err(OrderError::NotFound(_))
    ));

    let stats = system.statistics_client.snapshot().await.unwrap();
    assert_eq!(stats.total_orders, 1);
    assert_eq!(stats.total_amount, Decimal::from(6));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_waiter_call_leaves_statistics_alone() {
    let system = KarnevalSystem::start(&Config::default()).await.unwrap();
    let guest = system.guest_session("m23b", Arc::new(ManualClock::new(START)));

    let id = guest.call_waiter().await.unwrap();
    let call = system.order_client.get(id).await.unwrap().unwrap();
    assert!(call.is_waiter_call());
    assert!(call.items.is_empty());
    assert_eq!(call.total, None);

    system.order_client.dismiss(id).await.unwrap();
    assert_eq!(
        system.statistics_client.snapshot().await.unwrap(),
        Statistics::default()
    );

    drop(guest);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_orders_are_never_stored() {
    let system = KarnevalSystem::start(&Config::default()).await.unwrap();
    let mut guest = system.guest_session("W28G", Arc::new(ManualClock::new(START)));

    let mut basket = Basket::new();
    assert_eq!(guest.submit(&mut basket).await, Err(OrderError::EmptyOrder));

    // Zero-quantity lines sent straight to the client are rejected by the store.
    let table = TableNumber::new(7).unwrap();
    let result = system
        .order_client
        .submit(OrderCreate::order(table, "W28G", vec![pils(0)], START))
        .await;
    assert_eq!(result, Err(OrderError::EmptyOrder));

    assert!(system.order_client.list().await.unwrap().is_empty());

    drop(guest);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_live_bar_board_sees_new_orders() {
    let system = KarnevalSystem::start(&Config::default()).await.unwrap();
    let clock = ManualClock::new(START);
    let bar = system.bar_dashboard();
    let (mut boards, handle) = bar.live(Arc::new(clock.clone()), Duration::from_secs(10));

    assert!(boards.recv().await.unwrap().is_empty());

    let table = TableNumber::new(12).unwrap();
    let id = system
        .order_client
        .submit(OrderCreate::waiter_call(table, table_code(table), START))
        .await
        .unwrap();

    let board = boards.recv().await.unwrap();
    assert_eq!(board.ids(), vec![id]);
    assert_eq!(board.entries[0].phase, BarPhase::RedBlink);

    drop(bar);
    system.shutdown().await.unwrap();
    // The order store is gone, so the board task ends.
    assert!(boards.recv().await.is_none());
    handle.await.unwrap();
}

#[tokio::test]
async fn test_prices_always_come_from_the_menu() {
    let system = KarnevalSystem::start(&Config::default()).await.unwrap();
    let table = TableNumber::new(7).unwrap();

    let id = system
        .order_client
        .submit(OrderCreate::order(table, "W28G", vec![pils(1)], START))
        .await
        .unwrap();
    let stored = system.order_client.get(id).await.unwrap().unwrap();
    assert_eq!(stored.items[0].name, "Pils");
    assert_eq!(stored.items[0].price, Decimal::new(300, 2));
    system.order_client.dismiss(id).await.unwrap();
    let before = system.statistics_client.snapshot().await.unwrap();

    // An id outside the menu cannot smuggle in a name or price.
    let rejected = system
        .order_client
        .submit(OrderCreate::order(
            table,
            "W28G",
            vec![pils(1), OrderedItem::new("pils-gratis", 1)],
            START,
        ))
        .await;
    assert_eq!(rejected, Err(OrderError::UnknownMenuItem("pils-gratis".into())));
    assert!(system.order_client.list().await.unwrap().is_empty());

    let id = system
        .order_client
        .submit(OrderCreate::order(table, "W28G", vec![pils(1)], START))
        .await
        .unwrap();
    system.order_client.dismiss(id).await.unwrap();

    let after = system.statistics_client.snapshot().await.unwrap();
    assert_eq!(before.total_amount, Decimal::new(300, 2));
    assert_eq!(after.total_amount, Decimal::new(600, 2));
    assert_eq!(after.item_totals["Pils"].amount, Decimal::new(600, 2));
    assert_eq!(after.item_totals["Pils"].quantity, 2);

    system.shutdown().await.unwrap();
}
