/// Result alias used across the crate.
pub type VoiceprintsResult<T> = Result<T, VoiceprintsError>;

/// Top-level error type.
#[derive(thiserror::Error, Debug)]
pub enum VoiceprintsError {
    /// Invalid configuration or parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// The drawing surface could not be acquired or does not match the viewport.
    #[error("surface error: {0}")]
    Surface(String),

    /// Failure while drawing or reading back pixels.
    #[error("render error: {0}")]
    Render(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VoiceprintsError {
    /// Build a [`VoiceprintsError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`VoiceprintsError::Surface`].
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build a [`VoiceprintsError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`VoiceprintsError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
