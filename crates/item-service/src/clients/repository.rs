//! # Item Repository
//!
//! The store operations the HTTP handlers and the batch processor depend on. Keeping
//! them behind a trait lets tests swap in an instrumented or faulty store.
use super::ItemClient;
use crate::item_actor::ItemError;
use crate::model::{Item, ItemId};
use actor_store::ActorClient;
use async_trait::async_trait;

/// Id-keyed item store.
#[async_trait]
pub trait ItemRepository: Clone + Send + Sync + 'static {
    /// Snapshot of every stored item.
    async fn list(&self) -> Result<Vec<Item>, ItemError>;

    /// Point lookup.
    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, ItemError>;

    /// Inserts when `item.id` is `None`, replaces the stored record otherwise.
    async fn save(&self, item: Item) -> Result<Item, ItemError>;

    /// Removes the record if present.
    async fn delete_by_id(&self, id: ItemId) -> Result<(), ItemError>;

    /// Every id currently stored. Callers must not rely on the order.
    async fn find_all_ids(&self) -> Result<Vec<ItemId>, ItemError>;
}

#[async_trait]
impl ItemRepository for ItemClient {
    async fn list(&self) -> Result<Vec<Item>, ItemError> {
        ActorClient::list(self).await
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, ItemError> {
        ActorClient::get(self, id).await
    }

    async fn save(&self, item: Item) -> Result<Item, ItemError> {
        ActorClient::save(self, item).await
    }

    async fn delete_by_id(&self, id: ItemId) -> Result<(), ItemError> {
        ActorClient::delete(self, id).await
    }

    async fn find_all_ids(&self) -> Result<Vec<ItemId>, ItemError> {
        ActorClient::ids(self).await
    }
}
