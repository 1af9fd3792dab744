//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The Store Operations
/// The variants map directly onto the operations a record store exposes:
///
/// - **List**: Snapshot of every stored record.
/// - **Get**: Point lookup by id; `None` when absent.
/// - **Save**: Insert (no id) or replace (existing id). Replies with the persisted record.
/// - **Delete**: Remove by id; a no-op when the id is absent.
/// - **Ids**: Every id currently stored.
///
/// This type is generic over `T: ActorEntity`, so a request for one record type can never be
/// delivered to the actor of another.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Save {
        item: T,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Ids {
        respond_to: Response<Vec<T::Id>>,
    },
}
