//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur while preparing geometry for drawing.
///
/// The widget itself has no error surface: clamped configuration values
/// cannot produce invalid geometry, and the paint path logs and carries on
/// if tessellation of a well-formed shape ever fails.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Path tessellation failed.
    #[error("path tessellation failed: {0:?}")]
    Tessellation(lyon::tessellation::TessellationError),
}

impl From<lyon::tessellation::TessellationError> for RenderError {
    fn from(err: lyon::tessellation::TessellationError) -> Self {
        Self::Tessellation(err)
    }
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
