//! # ActorClient Trait
//!
//! Provides a common interface for resource‑specific clients, adding default implementations
//! of every store operation on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard store operations.
///
/// An implementor supplies the inner `ResourceClient` and a mapping from
/// [`FrameworkError`] into its own error type; `list`, `get`, `save`, `delete` and `ids`
/// come for free.
///
/// # Example
///
/// ```rust
/// use actor_store::{ActorClient, ActorEntity, FrameworkError, ResourceActor, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Note { id: Option<u64> }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("note error: {0}")]
/// struct NoteError(String);
///
/// impl ActorEntity for Note {
///     type Id = u64;
///     type Error = NoteError;
///     fn id(&self) -> Option<u64> { self.id }
///     fn assign_id(&mut self, id: u64) { self.id = Some(id); }
/// }
///
/// struct NoteClient { inner: ResourceClient<Note> }
///
/// #[async_trait]
/// impl ActorClient<Note> for NoteClient {
///     type Error = NoteError;
///
///     fn inner(&self) -> &ResourceClient<Note> { &self.inner }
///
///     fn map_error(e: FrameworkError) -> NoteError { NoteError(e.to_string()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, inner) = ResourceActor::<Note>::new(10);
///     tokio::spawn(actor.run());
///     let client = NoteClient { inner };
///
///     // save() and ids() are provided automatically
///     client.save(Note { id: None }).await.unwrap();
///     assert_eq!(client.ids().await.unwrap(), vec![1]);
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch every stored entity.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Insert or replace an entity.
    #[tracing::instrument(skip(self))]
    async fn save(&self, item: T) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().save(item).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// Enumerate the ids currently stored.
    #[tracing::instrument(skip(self))]
    async fn ids(&self) -> Result<Vec<T::Id>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().ids().await.map_err(Self::map_error)
    }
}
