/// Convenience result type used across Menucast.
pub type MenucastResult<T> = Result<T, MenucastError>;

/// Top-level error taxonomy used by the core APIs.
///
/// Errors only occur at the data-entry boundary (snapshot loading and
/// validation). Frame evaluation itself is infallible: malformed elements
/// are skipped per-frame, never raised.
#[derive(thiserror::Error, Debug)]
pub enum MenucastError {
    /// Invalid user-provided snapshot or element data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MenucastError {
    /// Build a [`MenucastError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MenucastError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
