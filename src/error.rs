//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying resize and array-shape errors, and provides semantic variants
//! for argument validation.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Image buffer error: {0}")]
    Buffer(#[from] fast_image_resize::ImageBufferError),

    #[error("Resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("Array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Size must be greater than 0, got: {width}x{height}")]
    ZeroSize { width: usize, height: usize },

    #[error("Buffer length {len} does not match {width}x{height}x{channels}")]
    BufferLength {
        len: usize,
        width: usize,
        height: usize,
        channels: usize,
    },

    #[error("Scale factor must be positive and keep both dimensions non-zero, got: {scale}")]
    InvalidScale { scale: f64 },

    #[error("Cannot pick a random item from an empty collection")]
    EmptyCollection,

    #[error(
        "Pad target {target_width}x{target_height} must exceed source {source_width}x{source_height} in both dimensions"
    )]
    PadTargetTooSmall {
        target_width: usize,
        target_height: usize,
        source_width: usize,
        source_height: usize,
    },

    #[error("Expected an image with {expected} channels, got {actual}")]
    ChannelMismatch { expected: usize, actual: usize },

    #[error(
        "Region ({x1},{y1})..({x2},{y2}) does not match a {width}x{height} overlay or exceeds the background"
    )]
    RegionMismatch {
        x1: usize,
        y1: usize,
        x2: usize,
        y2: usize,
        width: usize,
        height: usize,
    },
}
