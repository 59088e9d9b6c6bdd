use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Rule numbers live in 0..=255.
    #[error("rule {rule} out of range (must be between 0 and 255 inclusive)")]
    OutOfRange { rule: i64 },

    /// Offset must leave at least one visible row.
    #[error("invalid render offset {offset} for grid of height {height}")]
    InvalidOffset { offset: i64, height: usize },

    /// Grid must have at least one cell and at most `MAX_CELLS`.
    #[error("invalid grid size {width}x{height}")]
    InvalidSize { width: usize, height: usize },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),
}
