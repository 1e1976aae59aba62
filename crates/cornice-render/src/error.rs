//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur during raster operations.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A pixmap with zero or negative dimensions was requested.
    #[error("invalid pixmap dimensions: {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    /// A shadow was rendered without a box to cast it from.
    #[error("shadow box size is empty")]
    EmptyBoxSize,
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
