//! # Store Errors
//!
//! This module defines the common error types used throughout the actor store.
//! By centralizing error definitions, we ensure consistent error handling across
//! all actors, clients and the worker pool.

/// Errors that can occur within the actor store itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

/// Errors reported by a [`JobHandle`](crate::pool::JobHandle).
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum PoolError {
    /// The pool was shut down before the job could run.
    #[error("Worker pool closed")]
    Closed,
    /// The job panicked or was aborted while running.
    #[error("Job failed: {0}")]
    JobFailed(String),
    /// A worker task itself died.
    #[error("Worker failed: {0}")]
    WorkerFailed(String),
}
