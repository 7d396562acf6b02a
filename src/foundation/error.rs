/// Convenience result type used across typeloop.
pub type TypeloopResult<T> = Result<T, TypeloopError>;

/// Error taxonomy for the fallible edges of the crate (options, scenes, files).
///
/// The engine's tick path never fails; these only surface while building engines or
/// loading inputs.
#[derive(thiserror::Error, Debug)]
pub enum TypeloopError {
    /// Invalid options or scene data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors while reading input files.
    #[error("io error: {0}")]
    Io(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TypeloopError {
    /// Build a [`TypeloopError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TypeloopError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`TypeloopError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
