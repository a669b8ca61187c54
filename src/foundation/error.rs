/// Convenience result type used across img2ybt.
pub type YbtResult<T> = Result<T, YbtError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum YbtError {
    /// Invalid user-provided parameters or mismatched buffers.
    #[error("validation error: {0}")]
    Validation(String),

    /// The source image could not be read or decoded.
    #[error("load error: {0}")]
    Load(String),

    /// The output stream failed to open, accept a frame, or finalize.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl YbtError {
    /// Build a [`YbtError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`YbtError::Load`] value.
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    /// Build a [`YbtError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
