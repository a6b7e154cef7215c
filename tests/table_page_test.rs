use actor_framework::ActorClient;
use karneval::clock::ManualClock;
use karneval::config::Config;
use karneval::lifecycle::KarnevalSystem;
use karneval::order_actor::OrderError;
use karneval::settings_actor::SettingsError;
use karneval::submission::Basket;
use karneval::views::TableScreen;
use std::sync::Arc;

fn basket_with_pils() -> Basket {
    let mut basket = Basket::new();
    basket.add("pils");
    basket
}

#[tokio::test]
async fn test_shutdown_takes_every_table_out_of_service() {
    let config = Config::default();
    let system = KarnevalSystem::start(&config).await.unwrap();
    let bar = system.bar_dashboard();
    let clock = Arc::new(ManualClock::new(0));

    let mut guest = system.guest_session("W28G", clock.clone());
    let other = system.guest_session("B04L", clock.clone());
    assert_eq!(guest.screen(), TableScreen::Ordering);

    let pending = guest.submit(&mut basket_with_pils()).await.unwrap();

    bar.set_shutdown(&config.admin_pin, true).await.unwrap();
    assert_eq!(guest.settings_changed().await.unwrap(), TableScreen::OutOfService);
    assert_eq!(other.screen(), TableScreen::OutOfService);

    // Regardless of the order form flag.
    assert!(bar.toggle_order_form(&config.admin_pin).await.unwrap());
    assert_eq!(guest.settings_changed().await.unwrap(), TableScreen::OutOfService);

    assert_eq!(
        guest.submit(&mut basket_with_pils()).await,
        Err(OrderError::ServiceStopped)
    );
    assert_eq!(guest.call_waiter().await, Err(OrderError::ServiceStopped));

    bar.set_shutdown(&config.admin_pin, false).await.unwrap();
    assert!(!bar.toggle_order_form(&config.admin_pin).await.unwrap());
    assert_eq!(other.screen(), TableScreen::Ordering);
    assert!(guest.submit(&mut basket_with_pils()).await.is_ok());

    // The order placed before the stop was never touched.
    assert!(system.order_client.get(pending).await.unwrap().is_some());
    assert_eq!(system.order_client.list().await.unwrap().len(), 2);

    drop((bar, guest, other));
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_locked_order_form_still_allows_waiter_calls() {
    let config = Config::default();
    let system = KarnevalSystem::start(&config).await.unwrap();
    let bar = system.bar_dashboard();
    let mut guest = system.guest_session("W28G", Arc::new(ManualClock::new(0)));

    assert!(bar.toggle_order_form(&config.admin_pin).await.unwrap());
    assert_eq!(guest.screen(), TableScreen::WaiterCallOnly);
    assert_eq!(
        guest.submit(&mut basket_with_pils()).await,
        Err(OrderError::OrderFormLocked)
    );
    assert!(guest.call_waiter().await.is_ok());

    drop((bar, guest));
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_wrong_pin_changes_nothing() {
    let system = KarnevalSystem::start(&Config::default()).await.unwrap();
    let bar = system.bar_dashboard();

    assert_eq!(bar.set_shutdown("9999", true).await, Err(SettingsError::WrongPin));
    assert_eq!(bar.toggle_order_form("").await, Err(SettingsError::WrongPin));

    let settings = bar.settings().await.unwrap();
    assert!(!settings.shutdown);
    assert!(!settings.order_form_disabled);

    drop(bar);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_code_never_leaves_loading() {
    let system = KarnevalSystem::start(&Config::default()).await.unwrap();
    let mut guest = system.guest_session("ZZZZ", Arc::new(ManualClock::new(0)));

    assert_eq!(guest.table(), None);
    assert_eq!(guest.screen(), TableScreen::Loading);
    assert_eq!(
        guest.submit(&mut basket_with_pils()).await,
        Err(OrderError::UnknownTable("ZZZZ".into()))
    );
    assert_eq!(
        guest.call_waiter().await,
        Err(OrderError::UnknownTable("ZZZZ".into()))
    );

    drop(guest);
    system.shutdown().await.unwrap();
}
