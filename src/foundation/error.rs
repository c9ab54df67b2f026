/// Result alias used by the loading surface of the crate.
pub type UiResult<T> = Result<T, UiError>;

/// Errors returned while loading exports, atlases and fonts.
///
/// Building a widget tree never fails with a `UiError`; anomalies found while walking the tree are
/// reported through [`crate::foundation::diag::DiagnosticSink`] instead.
#[derive(thiserror::Error, Debug)]
pub enum UiError {
    /// Structurally invalid input (bad atlas entry, bad font header, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// A texture or other file-backed asset could not be read.
    #[error("asset error: {0}")]
    Asset(String),

    /// Font loading or glyph generation failed.
    #[error("font error: {0}")]
    Font(String),

    /// The export document failed to decode.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl UiError {
    /// Build a [`UiError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`UiError::Asset`].
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`UiError::Font`].
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`UiError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
