//! # Item Client
//!
//! Provides a high‑level API for interacting with the `Item` actor.
//! It wraps a `ResourceClient<Item>` and maps store failures back onto [`ItemError`].
use crate::item_actor::ItemError;
use crate::model::{Item, ItemId};
use actor_store::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Client for interacting with the Item actor.
#[derive(Clone)]
pub struct ItemClient {
    inner: ResourceClient<Item>,
}

impl ItemClient {
    pub fn new(inner: ResourceClient<Item>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Item> for ItemClient {
    type Error = ItemError;

    fn inner(&self) -> &ResourceClient<Item> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            // Hook failures carry the entity's own error; hand it back unchanged.
            FrameworkError::EntityError(source) => match source.downcast::<ItemError>() {
                Ok(item_error) => *item_error,
                Err(other) => ItemError::Storage(other.to_string()),
            },
            FrameworkError::NotFound(raw) => match raw.parse::<i64>() {
                Ok(id) => ItemError::NotFound(ItemId(id)),
                Err(_) => ItemError::Storage(format!("Item not found: {raw}")),
            },
            other => ItemError::Storage(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ValidationErrors;

    #[test]
    fn test_map_error_preserves_validation() {
        let mut errors = ValidationErrors::default();
        errors.add("email", "Invalid email!");
        let framework = FrameworkError::EntityError(Box::new(ItemError::Validation(errors.clone())));

        assert_eq!(ItemClient::map_error(framework), ItemError::Validation(errors));
    }

    #[test]
    fn test_map_error_not_found_and_transport() {
        assert_eq!(
            ItemClient::map_error(FrameworkError::NotFound("12".into())),
            ItemError::NotFound(ItemId(12))
        );
        assert!(matches!(
            ItemClient::map_error(FrameworkError::ActorClosed),
            ItemError::Storage(_)
        ));
    }
}
