//! # Settings Client
//!
//! PIN-gated access to the bar switches. A wrong PIN is rejected here, before
//! anything is sent to the actor, and there is no lockout.
use crate::model::{DocumentId, SettingsUpdate, SystemSettings};
use crate::settings_actor::{SettingsAction, SettingsError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct SettingsClient {
    inner: ResourceClient<SystemSettings>,
    id: DocumentId,
    admin_pin: String,
}

impl SettingsClient {
    /// Attaches to an existing settings document.
    pub fn new(
        inner: ResourceClient<SystemSettings>,
        id: DocumentId,
        admin_pin: impl Into<String>,
    ) -> Self {
        Self {
            inner,
            id,
            admin_pin: admin_pin.into(),
        }
    }

    /// Creates the settings document (everything switched on) and attaches to it.
    pub async fn open(
        inner: ResourceClient<SystemSettings>,
        admin_pin: impl Into<String>,
    ) -> Result<Self, SettingsError> {
        let id = inner
            .create(SystemSettings::default())
            .await
            .map_err(Self::map_error)?;
        Ok(Self::new(inner, id, admin_pin))
    }

    fn check_pin(&self, pin: &str) -> Result<(), SettingsError> {
        if pin == self.admin_pin {
            Ok(())
        } else {
            warn!("Wrong PIN entered");
            Err(SettingsError::WrongPin)
        }
    }

    #[instrument(skip(self))]
    pub async fn current(&self) -> Result<SystemSettings, SettingsError> {
        self.get(self.id)
            .await?
            .ok_or_else(|| SettingsError::NotFound(self.id.to_string()))
    }

    /// Emergency stop (`true`) or reactivation (`false`).
    #[instrument(skip(self, pin))]
    pub async fn set_shutdown(
        &self,
        pin: &str,
        shutdown: bool,
    ) -> Result<SystemSettings, SettingsError> {
        self.check_pin(pin)?;
        let update = SettingsUpdate {
            shutdown: Some(shutdown),
            ..SettingsUpdate::default()
        };
        let settings = self.inner.update(self.id, update).await.map_err(Self::map_error)?;
        info!(shutdown, "System shutdown flag set");
        Ok(settings)
    }

    #[instrument(skip(self, pin))]
    pub async fn set_order_form_disabled(
        &self,
        pin: &str,
        disabled: bool,
    ) -> Result<SystemSettings, SettingsError> {
        self.check_pin(pin)?;
        let update = SettingsUpdate {
            order_form_disabled: Some(disabled),
            ..SettingsUpdate::default()
        };
        self.inner.update(self.id, update).await.map_err(Self::map_error)
    }

    /// Flips the order-form lock and returns the new value.
    #[instrument(skip(self, pin))]
    pub async fn toggle_order_form(&self, pin: &str) -> Result<bool, SettingsError> {
        self.check_pin(pin)?;
        self.inner
            .perform_action(self.id, SettingsAction::ToggleOrderForm)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<SystemSettings> for SettingsClient {
    type Error = SettingsError;

    fn inner(&self) -> &ResourceClient<SystemSettings> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => SettingsError::NotFound(id),
            other => other
                .into_entity_error::<SettingsError>()
                .unwrap_or_else(|e| SettingsError::ActorCommunicationError(e.to_string())),
        }
    }
}
