//! Type-safe wrappers around [`ResourceClient`](actor_store::ResourceClient).

pub mod item_client;
pub mod repository;

pub use item_client::*;
pub use repository::*;
