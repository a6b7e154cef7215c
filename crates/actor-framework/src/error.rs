//! # Framework Errors
//!
//! Common error type shared by every store actor and client. Entity-specific
//! failures travel inside [`FrameworkError::EntityError`] so that domain clients
//! can downcast them back to their own error enum.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity error of type `E`, if that is what this error carries.
    ///
    /// Returns the original error unchanged when it is not an `EntityError`
    /// or the boxed error is of a different type.
    pub fn into_entity_error<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(err) => Ok(*err),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("empty basket")]
    struct EmptyBasket;

    #[test]
    fn entity_error_downcasts_to_its_own_type() {
        let err = FrameworkError::EntityError(Box::new(EmptyBasket));
        assert_eq!(err.into_entity_error::<EmptyBasket>().unwrap(), EmptyBasket);
    }

    #[test]
    fn other_errors_are_returned_unchanged() {
        let err = FrameworkError::NotFound("order_3".into());
        match err.into_entity_error::<EmptyBasket>() {
            Err(FrameworkError::NotFound(id)) => assert_eq!(id, "order_3"),
            other => panic!("unexpected result: {other:?}"),
        }

        let foreign = FrameworkError::EntityError(Box::new(std::io::Error::other("disk")));
        assert!(matches!(
            foreign.into_entity_error::<EmptyBasket>(),
            Err(FrameworkError::EntityError(_))
        ));
    }
}
