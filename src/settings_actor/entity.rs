//! Entity trait implementation for the system settings document.

use super::actions::SettingsAction;
use super::error::SettingsError;
use crate::model::{DocumentId, SettingsUpdate, SystemSettings};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::info;

#[async_trait]
impl ActorEntity for SystemSettings {
    type Id = DocumentId;
    type Create = SystemSettings;
    type Update = SettingsUpdate;
    type Action = SettingsAction;
    type ActionResult = bool;
    type Context = ();
    type Error = SettingsError;

    fn from_create_params(_id: DocumentId, initial: SystemSettings) -> Result<Self, Self::Error> {
        Ok(initial)
    }

    async fn on_update(&mut self, update: SettingsUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(shutdown) = update.shutdown {
            if shutdown != self.shutdown {
                info!(shutdown, "Emergency stop switched");
            }
            self.shutdown = shutdown;
        }
        if let Some(disabled) = update.order_form_disabled {
            self.order_form_disabled = disabled;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: SettingsAction,
        _ctx: &(),
    ) -> Result<bool, Self::Error> {
        match action {
            SettingsAction::ToggleOrderForm => {
                self.order_form_disabled = !self.order_form_disabled;
                info!(order_form_disabled = self.order_form_disabled, "Order form toggled");
                Ok(self.order_form_disabled)
            }
        }
    }
}
