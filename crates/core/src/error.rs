#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// `entity` is the human-readable label used in the response message
    /// (e.g. "Life group"); `id` is whatever the client sent.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}
