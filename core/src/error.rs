use thiserror::Error;

pub type Result<T> = std::result::Result<T, LandscapeError>;

#[derive(Debug, Error)]
pub enum LandscapeError {
    #[error("invalid dimension: {width}x{height} (both must be > 0)")]
    InvalidDimension { width: usize, height: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
