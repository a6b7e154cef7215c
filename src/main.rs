//! Demo: one evening at the bar in fast forward.
//!
//! A guest at table 7 orders, the bar and the waiter watch the order age, the
//! bar dismisses it and the statistics pick it up. Finally the table cards are
//! printed.

use anyhow::Context;
use karneval::alert::AlertPolicy;
use karneval::catalog::{
    all_table_codes, format_price, items_in, popular_items, premium_items, table_url, Category,
};
use karneval::clock::{Clock, ManualClock};
use karneval::config::Config;
use karneval::lifecycle::{setup_tracing, KarnevalSystem};
use karneval::profile::{JsonFileProfileStore, ProfileStore, WaiterProfile};
use karneval::submission::Basket;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    setup_tracing();

    let config = Config::from_env();
    info!(?config, "Starting Karneval demo");

    let system = KarnevalSystem::start(&config).await?;
    let clock = ManualClock::at(chrono::Utc::now());
    let shared_clock: Arc<dyn Clock> = Arc::new(clock.clone());

    let profile = match JsonFileProfileStore::new(&config.waiter_profile_path).load().await? {
        Some(profile) => profile,
        None => WaiterProfile::new("Anna", [7, 8, 9])?,
    };
    info!(waiter = %profile.name, tables = ?profile.tables, "Waiter on duty");

    let bar = system.bar_dashboard();
    let waiter = system.waiter_view(profile);
    let mut guest = system.guest_session("W28G", shared_clock);

    // Guest at table 7 orders two Cola and one Pils.
    let mut basket = Basket::new();
    basket.set("cola", 2);
    basket.add("pils");
    let total = basket.total()?;
    let order_id = guest
        .submit(&mut basket)
        .instrument(tracing::info_span!("guest_order"))
        .await?;
    info!(%order_id, total = %format_price(total), "Guest ordered");

    clock.advance(Duration::from_secs(65));
    let bar_board = bar.board(&clock).await?;
    let waiter_board = waiter.board(&clock).await?;
    let bar_entry = bar_board.entries.first().context("order missing on bar board")?;
    let waiter_entry = waiter_board
        .entries
        .first()
        .context("order missing on waiter board")?;
    info!(
        bar = bar_entry.phase.name(),
        waiter = waiter_entry.phase.name(),
        time = %bar_entry.time,
        "Order after 65 seconds"
    );

    clock.advance(Duration::from_secs(5));
    bar.dismiss(order_id)
        .instrument(tracing::info_span!("bar_dismiss"))
        .await?;

    let stats = bar.statistics().await?;
    info!(
        orders = stats.total_orders,
        total = %format_price(stats.total_amount),
        "Statistics after dismissal"
    );
    for (name, item) in stats.top_items() {
        info!(item = name, quantity = item.quantity, amount = %format_price(item.amount), "Top item");
    }
    info!(recent = guest.recent_orders().len(), "Guest history");

    print_menu();
    println!("Kellner: {}", bar.waiter_url());
    for (table, code) in all_table_codes() {
        let number = table.get();
        println!("Tisch {number:>2}  {code}  {}", table_url(&config.base_url, code));
    }

    drop((bar, waiter, guest));
    system.shutdown().await?;
    Ok(())
}

fn print_menu() {
    for category in Category::ALL {
        println!("{} {}", category.emoji(), category.name());
        for item in items_in(category) {
            let size = item.size.unwrap_or("");
            println!("  {} {:<24} {:>6} {:>9}", item.emoji, item.name, size, format_price(item.price()));
        }
    }
    let popular: Vec<&str> = popular_items().map(|item| item.name).collect();
    println!("Beliebt: {}", popular.join(", "));
    println!("Für den Tisch: {} Angebote", premium_items().count());
}
