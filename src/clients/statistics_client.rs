//! # Statistics Client
//!
//! Handle on the singleton `statistics` document.
use crate::model::{DocumentId, Order, Statistics};
use crate::statistics_actor::{StatisticsAction, StatisticsError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct StatisticsClient {
    inner: ResourceClient<Statistics>,
    id: DocumentId,
}

impl StatisticsClient {
    /// Attaches to an existing statistics document.
    pub fn new(inner: ResourceClient<Statistics>, id: DocumentId) -> Self {
        Self { inner, id }
    }

    /// Creates the (empty) statistics document and attaches to it.
    pub async fn open(inner: ResourceClient<Statistics>) -> Result<Self, StatisticsError> {
        let id = inner
            .create(Statistics::default())
            .await
            .map_err(Self::map_error)?;
        Ok(Self::new(inner, id))
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    /// Folds a dismissed order into the totals; `false` for waiter calls.
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    pub async fn record(&self, order: Order) -> Result<bool, StatisticsError> {
        debug!("Sending request");
        self.inner
            .perform_action(self.id, StatisticsAction::Record(Box::new(order)))
            .await
            .map_err(Self::map_error)
    }

    /// Current totals.
    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> Result<Statistics, StatisticsError> {
        self.get(self.id)
            .await?
            .ok_or_else(|| StatisticsError::NotFound(self.id.to_string()))
    }
}

#[async_trait]
impl ActorClient<Statistics> for StatisticsClient {
    type Error = StatisticsError;

    fn inner(&self) -> &ResourceClient<Statistics> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => StatisticsError::NotFound(id),
            other => other
                .into_entity_error::<StatisticsError>()
                .unwrap_or_else(|e| StatisticsError::ActorCommunicationError(e.to_string())),
        }
    }
}
