//! [`ActorEntity`] implementation for the Item domain type.

use super::ItemError;
use crate::model::{Item, ItemId, Validate};
use actor_store::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Item {
    type Id = ItemId;
    type Error = ItemError;

    fn id(&self) -> Option<ItemId> {
        self.id
    }

    fn assign_id(&mut self, id: ItemId) {
        self.id = Some(id);
    }

    /// Re-checks the constraints on every write, so records that bypass the HTTP
    /// layer are held to the same rules.
    async fn on_save(&mut self) -> Result<(), ItemError> {
        self.validate().map_err(ItemError::Validation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_on_save_rejects_invalid_email() {
        let mut item = Item::new("Lamp", "Desk lamp", "not-an-email");
        let err = item.on_save().await.unwrap_err();
        match err {
            ItemError::Validation(errors) => assert_eq!(errors.get("email"), Some("Invalid email!")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_assign_id() {
        let mut item = Item::default();
        item.assign_id(ItemId(3));
        assert_eq!(item.id(), Some(ItemId(3)));
    }
}
