//! # Actor Store
//!
//! Foundational building blocks for an actor-backed record store and a bounded worker pool,
//! both on Tokio.
//!
//! ## Why an actor for storage?
//!
//! - Isolated state: the record map is owned by a single task, so there are no locks
//! - Message-passing concurrency: any number of clients, one sequential writer
//! - Uniform API: every record type gets the same `list` / `get` / `save` / `delete` / `ids`
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Identity and lifecycle hooks of a stored record
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing and id assignment
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! Alongside the store sits the [`pool`] module: a fixed number of workers draining an
//! unbounded FIFO queue, for fan-out work that should not run on request tasks.
//!
//! ## Quick Example
//!
//! ```rust
//! use actor_store::{ActorEntity, ResourceActor, WorkerPool};
//!
//! #[derive(Clone, Debug)]
//! struct Task { id: Option<u64>, done: bool }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("task error")]
//! struct TaskError;
//!
//! impl ActorEntity for Task {
//!     type Id = u64;
//!     type Error = TaskError;
//!     fn id(&self) -> Option<u64> { self.id }
//!     fn assign_id(&mut self, id: u64) { self.id = Some(id); }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, store) = ResourceActor::<Task>::new(32);
//!     tokio::spawn(actor.run());
//!     let (pool, workers) = WorkerPool::spawn(4);
//!
//!     store.save(Task { id: None, done: false }).await.unwrap();
//!
//!     let mut handles = Vec::new();
//!     for id in store.ids().await.unwrap() {
//!         let store = store.clone();
//!         handles.push(workers.submit(move |_| async move {
//!             let mut task = store.get(id).await.unwrap().unwrap();
//!             task.done = true;
//!             store.save(task).await.unwrap()
//!         }));
//!     }
//!     for handle in handles {
//!         assert!(handle.join().await.unwrap().done);
//!     }
//!
//!     pool.shutdown().await.unwrap();
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task and handles messages **sequentially**
//! - Pool jobs run in **parallel**, never more than the pool size at once
//! - No shared mutable state between the two (message passing only)
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient<T>` from scripted expectations,
//! which makes store faults easy to inject. See the [`mock`] module.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod pool;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::{FrameworkError, PoolError};
pub use message::{ResourceRequest, Response};
pub use pool::{CancelSignal, JobHandle, PoolClient, WorkerPool};
