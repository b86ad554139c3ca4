/// Result alias used across `svgknob`.
pub type KnobResult<T> = Result<T, KnobError>;

/// Error type for fallible boundaries (configuration, assets, raster allocation).
///
/// The geometry kernel itself never returns errors: degenerate inputs there are caller
/// contract violations.
#[derive(thiserror::Error, Debug)]
pub enum KnobError {
    /// Invalid configuration or parameter value.
    #[error("validation error: {0}")]
    Validation(String),

    /// A graphic asset could not be parsed or has unusable dimensions.
    #[error("asset error: {0}")]
    Asset(String),

    /// The raster backend failed (for example, a pixmap could not be allocated).
    #[error("render error: {0}")]
    Render(String),

    /// Configuration (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error, usually IO with attached context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KnobError {
    /// Build a [`KnobError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`KnobError::Asset`].
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`KnobError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`KnobError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
