/// Result alias used across the crate.
pub type ThumbsmithResult<T> = Result<T, ThumbsmithError>;

/// Errors produced by rendering, exporting and configuration.
///
/// The design generator never returns an error; it falls back to defaults instead.
#[derive(thiserror::Error, Debug)]
pub enum ThumbsmithError {
    /// Invalid input or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Rasterization failed.
    #[error("render error: {0}")]
    Render(String),

    /// Encoding or delivering an exported file failed.
    #[error("export error: {0}")]
    Export(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error, usually I/O wrapped with context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ThumbsmithError {
    /// Build a [`ThumbsmithError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ThumbsmithError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ThumbsmithError::Export`].
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Build a [`ThumbsmithError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ThumbsmithError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
