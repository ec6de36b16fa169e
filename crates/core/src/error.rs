/// Domain-level error type shared across the workspace.
///
/// Carries a machine-readable kind per variant so callers can pick the
/// correct HTTP status without matching on message text. The key
/// distinction is three-way: absent (`NotFound`, `ReferenceNotFound`)
/// vs conflicting (`Conflict`) vs invalid (`Validation`).
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The directly requested entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// A foreign entity referenced by a create/update payload does not exist.
    #[error("Referenced {entity} with id {id} not found")]
    ReferenceNotFound { entity: &'static str, id: String },

    /// A uniqueness constraint was violated (duplicate key or composite).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A delete was rejected because dependent rows still reference the entity.
    #[error("Cannot delete {entity}: it is still referenced by other records")]
    StillReferenced { entity: &'static str },

    /// A domain rule was violated (e.g. a database CHECK constraint).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// An unexpected internal failure; the message is for logs, not clients.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Build a `NotFound` for an entity addressed by a single id.
    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        CoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Build a `NotFound` for a composite-key junction row.
    pub fn pair_not_found(
        entity: &'static str,
        a: impl std::fmt::Display,
        b: impl std::fmt::Display,
    ) -> Self {
        CoreError::NotFound {
            entity,
            id: format!("{a}/{b}"),
        }
    }

    /// Build a `ReferenceNotFound` for a missing foreign entity.
    pub fn reference_not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        CoreError::ReferenceNotFound {
            entity,
            id: id.to_string(),
        }
    }
}
