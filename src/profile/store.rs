//! Persistence for [`WaiterProfile`].

use super::{ProfileError, WaiterProfile};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// The saved profile, or `None` before the first setup.
    async fn load(&self) -> Result<Option<WaiterProfile>, ProfileError>;

    /// Validates and saves the profile.
    async fn save(&self, profile: &WaiterProfile) -> Result<(), ProfileError>;

    /// Forgets the profile; the next start shows the setup again.
    async fn reset(&self) -> Result<(), ProfileError>;
}

/// Stores the profile as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileProfileStore {
    path: PathBuf,
}

impl JsonFileProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProfileStore for JsonFileProfileStore {
    async fn load(&self) -> Result<Option<WaiterProfile>, ProfileError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No waiter profile yet");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let profile: WaiterProfile = serde_json::from_slice(&raw)?;
        if let Err(e) = profile.validate() {
            warn!(path = %self.path.display(), error = %e, "Ignoring incomplete waiter profile");
            return Ok(None);
        }
        Ok(Some(profile))
    }

    async fn save(&self, profile: &WaiterProfile) -> Result<(), ProfileError> {
        profile.validate()?;
        let raw = serde_json::to_vec_pretty(profile)?;
        tokio::fs::write(&self.path, raw).await?;
        info!(waiter = %profile.name, tables = profile.tables.len(), "Waiter profile saved");
        Ok(())
    }

    async fn reset(&self) -> Result<(), ProfileError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                info!(path = %self.path.display(), "Waiter profile reset");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
