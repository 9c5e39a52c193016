//! Shared plain-data types used across PIXELAUG.
//! Includes the pixel `Channels` layout, `Size`, `BoundingBox`, and the
//! color constants used for borders and annotation drawing.
use serde::{Deserialize, Serialize};

/// Green used for bounding-box outlines on RGB images.
pub const RGB_GREEN: [u8; 3] = [0, 255, 0];
/// Fully opaque green used for bounding-box outlines on RGBA images.
pub const RGBA_GREEN: [u8; 4] = [0, 255, 0, 255];
/// Solid black, the border color for padded RGB images.
pub const RGB_BLACK: [u8; 3] = [0, 0, 0];
/// Black with zero alpha, the border color for padded RGBA images.
pub const RGBA_BLACK: [u8; 4] = [0, 0, 0, 0];

/// Per-pixel channel layout of an image buffer.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Channels {
    Rgb,
    Rgba,
}

impl Channels {
    /// Number of u8 samples per pixel.
    pub fn count(&self) -> usize {
        match self {
            Channels::Rgb => 3,
            Channels::Rgba => 4,
        }
    }
}

impl std::fmt::Display for Channels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Channels::Rgb => write!(f, "RGB"),
            Channels::Rgba => write!(f, "RGBA"),
        }
    }
}

/// Target dimensions in pixels, `(width, height)`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Axis-aligned rectangle given by two opposite corners, `x1 <= x2` and
/// `y1 <= y2` assumed. Both corners are in pixel coordinates; the region
/// covered by slicing is `x1..x2` by `y1..y2`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x1: usize,
    pub y1: usize,
    pub x2: usize,
    pub y2: usize,
}

impl BoundingBox {
    pub fn new(x1: usize, y1: usize, x2: usize, y2: usize) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})..({},{})", self.x1, self.y1, self.x2, self.y2)
    }
}
