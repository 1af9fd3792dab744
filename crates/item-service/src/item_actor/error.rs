//! Error types for the Item actor.

use crate::model::{ItemId, ValidationErrors};
use thiserror::Error;

/// Errors that can occur during item operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ItemError {
    /// The requested item was not found.
    #[error("Item with ID {0} not found.")]
    NotFound(ItemId),

    /// The item violates a declared constraint.
    #[error("Item validation error: {0}")]
    Validation(ValidationErrors),

    /// The store could not be reached or failed the request.
    #[error("Item storage error: {0}")]
    Storage(String),
}
