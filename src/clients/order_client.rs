//! # Order Client
//!
//! Submitting and dismissing orders. Validation happens inside the order actor
//! (`from_create_params`), statistics recording in its `on_delete` hook.
use crate::model::{Order, OrderCreate, OrderId};
use crate::order_actor::OrderError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Places an order or waiter call and returns the id the store assigned.
    #[instrument(skip(self, params), fields(table = %params.table_number, kind = ?params.kind))]
    pub async fn submit(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(?params, "submit called");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(order_id = %id, "Order submitted");
        Ok(id)
    }

    /// Dismisses an order: records it into the statistics, then deletes it.
    ///
    /// A second dismissal of the same id fails with [`OrderError::NotFound`].
    #[instrument(skip(self))]
    pub async fn dismiss(&self, id: OrderId) -> Result<(), OrderError> {
        self.inner.delete(id).await.map_err(Self::map_error)?;
        info!(order_id = %id, "Order dismissed");
        Ok(())
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => other
                .into_entity_error::<OrderError>()
                .unwrap_or_else(|e| OrderError::ActorCommunicationError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TableNumber;
    use actor_framework::mock::{create_mock_client, expect_create, MockClient};

    fn waiter_call() -> OrderCreate {
        OrderCreate::waiter_call(TableNumber::new(12).unwrap(), "B44L", 0)
    }

    #[tokio::test]
    async fn test_submit_forwards_params() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let orders = OrderClient::new(client);

        let task = tokio::spawn(async move { orders.submit(waiter_call()).await });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.table_code, "B44L");
        responder.send(Ok(OrderId(4))).unwrap();

        assert_eq!(task.await.unwrap(), Ok(OrderId(4)));
    }

    #[tokio::test]
    async fn test_entity_errors_come_back_typed() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(OrderError::EmptyOrder)));
        mock.expect_delete(OrderId(9))
            .return_err(FrameworkError::NotFound("order_9".into()));
        mock.expect_create().return_err(FrameworkError::ActorClosed);

        let orders = OrderClient::new(mock.client());
        assert_eq!(orders.submit(waiter_call()).await, Err(OrderError::EmptyOrder));
        assert_eq!(
            orders.dismiss(OrderId(9)).await,
            Err(OrderError::NotFound("order_9".into()))
        );
        assert!(matches!(
            orders.submit(waiter_call()).await,
            Err(OrderError::ActorCommunicationError(_))
        ));
        mock.verify();
    }
}
