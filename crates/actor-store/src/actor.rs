//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a collection of
//! records. It implements the "Server" side of the Actor Model, processing messages
//! sequentially and ensuring exclusive access to the record map.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that stores a collection of records.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Any number of clients may talk to one `ResourceActor` concurrently, but the actor
/// processes its messages *sequentially* in a loop. The store therefore needs no
/// `Mutex` or `RwLock`: exclusive ownership of state within the task is the lock.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn the actor's run loop in a background task.
/// 3.  **Use**: Clone the client freely; drop every clone to stop the actor.
///
/// ```rust
/// use actor_store::{ActorEntity, ResourceActor};
///
/// #[derive(Clone, Debug)]
/// struct Note { id: Option<u64>, text: String }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("note error")]
/// struct NoteError;
///
/// impl ActorEntity for Note {
///     type Id = u64;
///     type Error = NoteError;
///     fn id(&self) -> Option<u64> { self.id }
///     fn assign_id(&mut self, id: u64) { self.id = Some(id); }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10);
///     tokio::spawn(actor.run());
///
///     let saved = client.save(Note { id: None, text: "hello".into() }).await.unwrap();
///     assert_eq!(saved.id, Some(1));
/// }
/// ```
///
/// # Operations
///
/// * **Save**:
///     1. No id: takes the next value of the `next_id` counter and stamps it on the record.
///     2. Known id: the incoming record replaces the stored one.
///     3. Unknown id: rejected with [`FrameworkError::NotFound`]; the store never
///        invents a record under an id it did not hand out for it.
///     4. Calls the `on_save` hook; an error aborts the write.
///
/// * **Delete**: Calls `on_delete` and removes the record. Absent ids are a no-op.
///
/// * **List / Ids**: Snapshots in ascending id order.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u64,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Item" instead of "item_service::model::item::Item")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    let mut items: Vec<T> = self.store.values().cloned().collect();
                    items.sort_by(|a, b| a.id().cmp(&b.id()));
                    debug!(entity_type, size = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Save {
                    mut item,
                    respond_to,
                } => {
                    debug!(entity_type, ?item, "Save");
                    let id = match item.id() {
                        Some(id) if self.store.contains_key(&id) => id,
                        Some(id) => {
                            warn!(entity_type, %id, "Not found");
                            let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                            continue;
                        }
                        None => {
                            let id = T::Id::from(self.next_id);
                            self.next_id += 1;
                            item.assign_id(id.clone());
                            id
                        }
                    };

                    if let Err(e) = item.on_save().await {
                        warn!(entity_type, %id, error = %e, "on_save failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }

                    let created = self.store.insert(id.clone(), item.clone()).is_none();
                    if created {
                        info!(entity_type, %id, size = self.store.len(), "Created");
                    } else {
                        info!(entity_type, %id, "Updated");
                    }
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete().await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                    } else {
                        debug!(entity_type, %id, "Delete of absent id ignored");
                    }
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Ids { respond_to } => {
                    let mut ids: Vec<T::Id> = self.store.keys().cloned().collect();
                    ids.sort();
                    debug!(entity_type, size = ids.len(), "Ids");
                    let _ = respond_to.send(Ok(ids));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: Option<u64>,
        text: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("empty note")]
    struct EmptyNote;

    #[async_trait]
    impl ActorEntity for Note {
        type Id = u64;
        type Error = EmptyNote;

        fn id(&self) -> Option<u64> {
            self.id
        }

        fn assign_id(&mut self, id: u64) {
            self.id = Some(id);
        }

        async fn on_save(&mut self) -> Result<(), EmptyNote> {
            if self.text.is_empty() {
                return Err(EmptyNote);
            }
            Ok(())
        }
    }

    fn note(text: &str) -> Note {
        Note {
            id: None,
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_assigns_fresh_ids() {
        let (actor, client) = ResourceActor::<Note>::new(10);
        tokio::spawn(actor.run());

        let first = client.save(note("a")).await.unwrap();
        let second = client.save(note("b")).await.unwrap();
        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));

        // Deleted ids are never handed out again
        client.delete(2).await.unwrap();
        let third = client.save(note("c")).await.unwrap();
        assert_eq!(third.id, Some(3));
    }

    #[tokio::test]
    async fn test_save_with_existing_id_replaces_record() {
        let (actor, client) = ResourceActor::<Note>::new(10);
        tokio::spawn(actor.run());

        let mut saved = client.save(note("draft")).await.unwrap();
        saved.text = "final".into();
        let replaced = client.save(saved).await.unwrap();

        assert_eq!(replaced.id, Some(1));
        assert_eq!(client.get(1).await.unwrap().unwrap().text, "final");
        assert_eq!(client.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_with_unknown_id_is_rejected() {
        let (actor, client) = ResourceActor::<Note>::new(10);
        tokio::spawn(actor.run());

        let orphan = Note {
            id: Some(42),
            text: "ghost".into(),
        };
        let result = client.save(orphan).await;
        assert!(matches!(result, Err(FrameworkError::NotFound(id)) if id == "42"));
        assert!(client.ids().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_hook_leaves_store_unchanged() {
        let (actor, client) = ResourceActor::<Note>::new(10);
        tokio::spawn(actor.run());

        let result = client.save(note("")).await;
        assert!(matches!(result, Err(FrameworkError::EntityError(_))));
        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_absent_id_is_noop() {
        let (actor, client) = ResourceActor::<Note>::new(10);
        tokio::spawn(actor.run());

        client.save(note("keep")).await.unwrap();
        client.delete(99).await.unwrap();
        assert_eq!(client.ids().await.unwrap(), vec![1]);
    }

    #[tokio::test]
    async fn test_list_and_ids_are_ordered() {
        let (actor, client) = ResourceActor::<Note>::new(10);
        tokio::spawn(actor.run());

        for text in ["a", "b", "c", "d"] {
            client.save(note(text)).await.unwrap();
        }
        client.delete(2).await.unwrap();

        assert_eq!(client.ids().await.unwrap(), vec![1, 3, 4]);
        let texts: Vec<String> = client
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.text)
            .collect();
        assert_eq!(texts, vec!["a", "c", "d"]);
    }
}
