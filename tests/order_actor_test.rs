use actor_framework::mock::MockClient;
use actor_framework::{ActorClient, FrameworkError};
use karneval::catalog::TableNumber;
use karneval::clients::{OrderClient, StatisticsClient};
use karneval::model::{DocumentId, OrderCreate, OrderedItem, Statistics};
use karneval::order_actor::OrderError;
use karneval::statistics_actor::StatisticsError;
use rust_decimal::Decimal;

fn cola_order() -> OrderCreate {
    let cola = OrderedItem::new("cola", 2);
    OrderCreate::order(TableNumber::new(7).unwrap(), "W28G", vec![cola], 0)
}

/// Real Order actor with a mocked statistics dependency.
/// Dismissal goes through `Order::on_delete`, which must record exactly once.
#[tokio::test]
async fn test_dismissal_records_statistics_once() {
    let mut stats_mock = MockClient::<Statistics>::new();
    stats_mock.expect_action(DocumentId(1)).return_ok(true);

    let statistics = StatisticsClient::new(stats_mock.client(), DocumentId(1));
    let (order_actor, orders) = karneval::order_actor::new(8);
    let actor_handle = tokio::spawn(order_actor.run(statistics));
    let orders = OrderClient::new(orders);

    let id = orders.submit(cola_order()).await.expect("Submit failed");
    orders.dismiss(id).await.expect("Dismiss failed");
    assert!(orders.get(id).await.unwrap().is_none());

    // Waiter calls do not reach the statistics; the mock has no expectation left.
    let call = orders
        .submit(OrderCreate::waiter_call(TableNumber::new(7).unwrap(), "W28G", 0))
        .await
        .unwrap();
    orders.dismiss(call).await.expect("Dismiss failed");

    stats_mock.verify();

    drop(orders);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_failed_recording_keeps_the_order() {
    let mut stats_mock = MockClient::<Statistics>::new();
    stats_mock
        .expect_action(DocumentId(1))
        .return_err(FrameworkError::ActorClosed);

    let statistics = StatisticsClient::new(stats_mock.client(), DocumentId(1));
    let (order_actor, orders) = karneval::order_actor::new(8);
    let actor_handle = tokio::spawn(order_actor.run(statistics));
    let orders = OrderClient::new(orders);

    let id = orders.submit(cola_order()).await.unwrap();
    let result = orders.dismiss(id).await;
    assert!(
        matches!(
            result,
            Err(OrderError::Statistics(StatisticsError::ActorCommunicationError(_)))
        ),
        "unexpected result: {result:?}"
    );

    let kept = orders.get(id).await.unwrap().expect("Order was lost");
    assert_eq!(kept.total, Some(Decimal::new(500, 2)));
    stats_mock.verify();

    drop(orders);
    actor_handle.await.unwrap();
}
