use super::RecordId;
use thiserror::Error;

/// Failures of [`super::EntityStore`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{entity} `{id}` not found")]
    NotFound { entity: &'static str, id: RecordId },

    #[error("{entity} `{id}` cannot be deleted: {reason}")]
    DeleteBlocked {
        entity: &'static str,
        id: RecordId,
        reason: String,
    },
}
