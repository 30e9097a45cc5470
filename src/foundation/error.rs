/// Convenience result type used across the crate.
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Top-level error taxonomy used by encoder and harness APIs.
#[derive(thiserror::Error, Debug)]
pub enum ProbeError {
    /// A caller-supplied value is outside the accepted domain (e.g. a color sample above 255).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid harness configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing JSON documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// A byte stream could not be decoded as an image.
    #[error("decode error: {0}")]
    Decode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ProbeError {
    /// Build a [`ProbeError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a [`ProbeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ProbeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`ProbeError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

impl From<serde_json::Error> for ProbeError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
