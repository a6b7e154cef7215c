//! Wall-clock access for everything that ages orders.
//!
//! Views and submissions never call `Utc::now()` directly; they go through a
//! [`Clock`] so tests and the demo can move time forward by hand.

use chrono::{DateTime, Local, TimeZone, Utc};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub trait Clock: Send + Sync {
    /// Current time in epoch milliseconds.
    fn now_millis(&self) -> i64;

    /// `HH:MM` wall-clock time of an epoch-millisecond timestamp.
    fn format_time(&self, timestamp_ms: i64) -> String {
        format_hh_mm(timestamp_ms, &Local)
    }
}

/// The real clock, formatting times in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// A clock that only moves when told to. Clones share the same time.
///
/// Times are formatted in UTC so output does not depend on the host.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now_ms: Arc<AtomicI64>,
}

impl ManualClock {
    pub fn new(start_ms: i64) -> Self {
        Self {
            now_ms: Arc::new(AtomicI64::new(start_ms)),
        }
    }

    pub fn at(start: DateTime<Utc>) -> Self {
        Self::new(start.timestamp_millis())
    }

    pub fn advance(&self, by: Duration) {
        let by_ms = i64::try_from(by.as_millis()).unwrap_or(i64::MAX);
        self.now_ms.fetch_add(by_ms, Ordering::SeqCst);
    }

    pub fn set(&self, now_ms: i64) {
        self.now_ms.store(now_ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now_ms.load(Ordering::SeqCst)
    }

    fn format_time(&self, timestamp_ms: i64) -> String {
        format_hh_mm(timestamp_ms, &Utc)
    }
}

pub fn format_hh_mm<Tz: TimeZone>(timestamp_ms: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match tz.timestamp_millis_opt(timestamp_ms).single() {
        Some(time) => time.format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}

/// Age of something stamped at `timestamp_ms`, clamped at zero for future stamps.
pub fn age_at(timestamp_ms: i64, now_ms: i64) -> Duration {
    let elapsed = now_ms.saturating_sub(timestamp_ms).max(0);
    Duration::from_millis(elapsed as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new(1_000);
        let other = clock.clone();
        clock.advance(Duration::from_secs(65));
        assert_eq!(other.now_millis(), 66_000);
        other.set(5);
        assert_eq!(clock.now_millis(), 5);
    }

    #[test]
    fn manual_clock_starts_at_given_instant() {
        let start = Utc.with_ymd_and_hms(2024, 2, 8, 19, 11, 30).unwrap();
        let clock = ManualClock::at(start);
        assert_eq!(clock.now_millis(), 1_707_419_490_000);
    }

    #[test]
    fn format_time_is_hours_and_minutes() {
        let clock = ManualClock::new(0);
        // 2024-02-08 19:11:30 UTC
        assert_eq!(clock.format_time(1_707_419_490_000), "19:11");
    }

    #[test]
    fn future_timestamps_have_zero_age() {
        assert_eq!(age_at(10_000, 4_000), Duration::ZERO);
        assert_eq!(age_at(4_000, 10_000), Duration::from_secs(6));
    }
}
