/// Convenience result type used across capsync.
pub type CapsyncResult<T> = Result<T, CapsyncError>;

/// Error taxonomy for the ambient edges of the engine.
///
/// Rendering and exporting never fail; these errors only surface while loading, validating,
/// or batching caption data.
#[derive(thiserror::Error, Debug)]
pub enum CapsyncError {
    /// Invalid caption state or configuration values.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while setting up batch frame evaluation.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CapsyncError {
    /// Build a [`CapsyncError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CapsyncError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`CapsyncError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
