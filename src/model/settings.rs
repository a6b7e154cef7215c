use serde::{Deserialize, Serialize};

/// Global switches owned by the bar, stored under `system/`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSettings {
    /// Emergency stop: every table page is out of service.
    pub shutdown: bool,
    /// Only waiter calls are accepted.
    pub order_form_disabled: bool,
}

impl SystemSettings {
    /// Settings held in a store snapshot; defaults while the document does not exist yet.
    pub fn from_snapshot(snapshot: &[SystemSettings]) -> Self {
        snapshot.first().copied().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub shutdown: Option<bool>,
    pub order_form_disabled: Option<bool>,
}
