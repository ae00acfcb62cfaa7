//! Error type shared by the terrain pipeline and its exporters.

use thiserror::Error;

/// Errors raised at the terrain core's call boundary.
#[derive(Error, Debug)]
pub enum TerrainError {
    /// Caller supplied a value the pipeline cannot work with
    /// (zero dimensions, zero octaves, degenerate remap domain, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

impl TerrainError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        TerrainError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, TerrainError>;
