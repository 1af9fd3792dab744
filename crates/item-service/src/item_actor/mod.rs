//! # Item Actor
//!
//! The Item resource actor: an in-memory item store behind a
//! [`ResourceActor`](actor_store::ResourceActor).
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_store::ActorEntity) implementation for [`Item`]
//! - [`error`] - [`ItemError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use actor_store::ActorClient;
//! use item_service::item_actor;
//! use item_service::model::Item;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = item_actor::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let saved = client.save(Item::new("Lamp", "Desk lamp", "shop@example.com")).await?;
//!     assert!(saved.id.is_some());
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ItemClient;
use crate::model::Item;
use actor_store::ResourceActor;

/// Creates a new Item actor and its client.
pub fn new(mailbox_capacity: usize) -> (ResourceActor<Item>, ItemClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox_capacity);
    let client = ItemClient::new(generic_client);

    (actor, client)
}
