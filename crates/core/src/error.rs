use crate::types::DbId;
use crate::validation::FieldErrors;

/// Domain-level error type shared across crates.
///
/// The HTTP layer (`memo-api`) maps each variant to a status code and a
/// JSON body; nothing in this crate knows about HTTP.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested entity does not exist, or is not visible in the
    /// state the caller asked for (e.g. an active memo looked up through
    /// the trash view).
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// One or more request fields failed validation.
    #[error("The given data was invalid")]
    Validation(FieldErrors),

    /// A uniqueness or state conflict.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing or invalid credentials / session.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Valid session, but the caller does not own the resource.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}
