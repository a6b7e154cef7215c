use std::path::PathBuf;
use std::time::Duration;

/// Runtime settings, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// PIN the bar enters before flipping a switch.
    pub admin_pin: String,
    /// Public address the table cards point at.
    pub base_url: String,
    /// How often boards re-classify without a store change.
    pub refresh_interval: Duration,
    /// Request queue length of each actor.
    pub channel_buffer: usize,
    /// Where a waiter's device keeps its profile.
    pub waiter_profile_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            admin_pin: "1234".to_string(),
            base_url: "http://localhost:3000".to_string(),
            refresh_interval: Duration::from_secs(10),
            channel_buffer: 32,
            waiter_profile_path: PathBuf::from("kellner.json"),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            admin_pin: std::env::var("KARNEVAL_ADMIN_PIN").unwrap_or(defaults.admin_pin),
            base_url: std::env::var("KARNEVAL_BASE_URL").unwrap_or(defaults.base_url),
            refresh_interval: std::env::var("KARNEVAL_REFRESH_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|secs: &u64| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.refresh_interval),
            channel_buffer: std::env::var("KARNEVAL_CHANNEL_BUFFER")
                .ok()
                .and_then(|n| n.parse().ok())
                .filter(|n: &usize| *n > 0)
                .unwrap_or(defaults.channel_buffer),
            waiter_profile_path: std::env::var("KARNEVAL_WAITER_PROFILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.waiter_profile_path),
        }
    }
}
