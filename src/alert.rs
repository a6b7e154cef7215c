//! Alert phases: how urgent an order looks, purely from its age.
//!
//! The bar and the waiters use different bucket sets. Both are kept as separate
//! policies. Boundary ages belong to the later bucket, so an order that is exactly
//! one minute old is no longer in the first phase.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::time::Duration;

const MINUTE: u64 = 60_000;

/// A way of bucketing order age into display phases.
pub trait AlertPolicy: Copy + Debug + PartialEq + Send + Sync + 'static {
    fn classify(age: Duration) -> Self;

    fn is_expired(self) -> bool;

    /// Kebab-case phase name, as used for styling.
    fn name(self) -> &'static str;
}

/// Bar dashboard phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BarPhase {
    RedBlink,
    RedSolid,
    Orange,
    Green,
    Expired,
}

impl AlertPolicy for BarPhase {
    fn classify(age: Duration) -> Self {
        match age.as_millis() as u64 {
            ms if ms < MINUTE => BarPhase::RedBlink,
            ms if ms < 2 * MINUTE => BarPhase::RedSolid,
            ms if ms < 4 * MINUTE => BarPhase::Orange,
            ms if ms < 6 * MINUTE => BarPhase::Green,
            _ => BarPhase::Expired,
        }
    }

    fn is_expired(self) -> bool {
        self == BarPhase::Expired
    }

    fn name(self) -> &'static str {
        match self {
            BarPhase::RedBlink => "red-blink",
            BarPhase::RedSolid => "red-solid",
            BarPhase::Orange => "orange",
            BarPhase::Green => "green",
            BarPhase::Expired => "expired",
        }
    }
}

/// Waiter view phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WaiterPhase {
    Red,
    Orange,
    Green,
    Expired,
}

impl AlertPolicy for WaiterPhase {
    fn classify(age: Duration) -> Self {
        match age.as_millis() as u64 {
            ms if ms < MINUTE => WaiterPhase::Red,
            ms if ms < 3 * MINUTE => WaiterPhase::Orange,
            ms if ms < 5 * MINUTE => WaiterPhase::Green,
            _ => WaiterPhase::Expired,
        }
    }

    fn is_expired(self) -> bool {
        self == WaiterPhase::Expired
    }

    fn name(self) -> &'static str {
        match self {
            WaiterPhase::Red => "red",
            WaiterPhase::Orange => "orange",
            WaiterPhase::Green => "green",
            WaiterPhase::Expired => "expired",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn bar_boundaries_belong_to_the_later_bucket() {
        assert_eq!(BarPhase::classify(Duration::ZERO), BarPhase::RedBlink);
        assert_eq!(BarPhase::classify(Duration::from_millis(59_999)), BarPhase::RedBlink);
        assert_eq!(BarPhase::classify(secs(60)), BarPhase::RedSolid);
        assert_eq!(BarPhase::classify(secs(120)), BarPhase::Orange);
        assert_eq!(BarPhase::classify(secs(240)), BarPhase::Green);
        assert_eq!(BarPhase::classify(secs(359)), BarPhase::Green);
        assert_eq!(BarPhase::classify(secs(360)), BarPhase::Expired);
        assert!(BarPhase::classify(secs(3600)).is_expired());
    }

    #[test]
    fn waiter_boundaries_belong_to_the_later_bucket() {
        assert_eq!(WaiterPhase::classify(Duration::ZERO), WaiterPhase::Red);
        assert_eq!(WaiterPhase::classify(secs(60)), WaiterPhase::Orange);
        assert_eq!(WaiterPhase::classify(secs(179)), WaiterPhase::Orange);
        assert_eq!(WaiterPhase::classify(secs(180)), WaiterPhase::Green);
        assert_eq!(WaiterPhase::classify(secs(300)), WaiterPhase::Expired);
    }

    #[test]
    fn policies_disagree_at_sixty_five_seconds() {
        assert_eq!(BarPhase::classify(secs(65)).name(), "red-solid");
        assert_eq!(WaiterPhase::classify(secs(65)).name(), "orange");
    }

    #[test]
    fn classification_is_monotonic() {
        fn rank<P: AlertPolicy>(order: &[P], phase: P) -> usize {
            order.iter().position(|p| *p == phase).unwrap()
        }
        let bar = [
            BarPhase::RedBlink,
            BarPhase::RedSolid,
            BarPhase::Orange,
            BarPhase::Green,
            BarPhase::Expired,
        ];
        let waiter = [
            WaiterPhase::Red,
            WaiterPhase::Orange,
            WaiterPhase::Green,
            WaiterPhase::Expired,
        ];

        let mut last_bar = 0;
        let mut last_waiter = 0;
        for s in (0..420).step_by(5) {
            let b = rank(&bar, BarPhase::classify(secs(s)));
            let w = rank(&waiter, WaiterPhase::classify(secs(s)));
            assert!(b >= last_bar && w >= last_waiter, "regressed at {s}s");
            last_bar = b;
            last_waiter = w;
        }
    }

    #[test]
    fn phases_serialise_kebab_case() {
        assert_eq!(serde_json::to_string(&BarPhase::RedBlink).unwrap(), "\"red-blink\"");
        assert_eq!(serde_json::to_string(&WaiterPhase::Green).unwrap(), "\"green\"");
    }
}
