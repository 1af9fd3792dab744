//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every stored record must implement to be
//! managed by the generic `ResourceActor`. It specifies associated types for the identifier and
//! the error, accessors for the store-assigned id, and the async lifecycle hooks
//! (`on_save`, `on_delete`).
//!
//! # Architecture Note
//! By defining a contract (`ActorEntity`) that stored records must satisfy, the `ResourceActor`
//! logic (id assignment, insert-or-replace, enumeration) is written *once* and reused for any
//! record type.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_save`]
//! - [`ActorEntity::on_delete`]
//!
//! You do **not** need to implement these methods unless you want to customize behavior.
//! The default implementation does nothing (`Ok(())`).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any stored record must implement to be managed by ResourceActor.
///
/// The store owns identity: a record enters the store without an id and leaves every
/// successful `save` with one. Ids are generated from a `u64` counter, so `Id` must be
/// convertible from `u64`. `Ord` lets the store enumerate records in a stable order.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + Debug + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Ord + Clone + Send + Sync + Display + Debug + From<u64> + 'static;

    /// The error type for this entity.
    ///
    /// # Design Note: Error Granularity
    ///
    /// One error enum per entity rather than one per operation. Clients deal with a single
    /// error type, at the cost of every hook sharing the same variants.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The store-assigned id, or `None` for a record that has never been saved.
    fn id(&self) -> Option<Self::Id>;

    /// Stamps the id onto the record. Called by the store on insert only.
    fn assign_id(&mut self, id: Self::Id);

    // --- Lifecycle Hooks (Async) ---

    /// Called before the record is written, on both insert and replace.
    /// Returning an error aborts the write and leaves the store unchanged.
    async fn on_save(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called immediately before the record is removed from the store.
    async fn on_delete(&self) -> Result<(), Self::Error> {
        Ok(())
    }
}
