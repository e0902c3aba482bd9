//! Domain error model.

use thiserror::Error;

use crate::id::RecordId;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (bad
/// identifiers, missing records). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested record does not exist.
    ///
    /// The message format is part of the API contract.
    #[error("{entity} with id {id} not found")]
    EntityNotFound {
        entity: &'static str,
        id: RecordId,
    },
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn entity_not_found(entity: &'static str, id: RecordId) -> Self {
        Self::EntityNotFound { entity, id }
    }
}
