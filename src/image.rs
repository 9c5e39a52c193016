//! In-memory image buffer: a dense row-major `(height, width, channels)`
//! grid of u8 samples. All transforms in this crate consume and produce
//! this type; the caller owns the buffer at all times.
use ndarray::{ArrayView3, ArrayViewMut3};

use crate::error::{Error, Result};
use crate::types::{Channels, Size};

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ImageBuffer {
    width: usize,
    height: usize,
    channels: Channels,
    data: Vec<u8>,
}

impl ImageBuffer {
    /// Creates a zero-filled (black, zero-alpha) image.
    pub fn new(width: usize, height: usize, channels: Channels) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::ZeroSize { width, height });
        }
        Ok(Self {
            width,
            height,
            channels,
            data: vec![0u8; width * height * channels.count()],
        })
    }

    /// Wraps an existing row-major sample buffer, validating its length
    /// against the declared dimensions.
    pub fn from_vec(width: usize, height: usize, channels: Channels, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::ZeroSize { width, height });
        }
        if data.len() != width * height * channels.count() {
            return Err(Error::BufferLength {
                len: data.len(),
                width,
                height,
                channels: channels.count(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn channels(&self) -> Channels {
        self.channels
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Samples of the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let stride = self.channels.count();
        let offset = (y * self.width + x) * stride;
        Some(&self.data[offset..offset + stride])
    }

    /// 3-D `(height, width, channels)` view for windowed pixel math.
    pub fn view(&self) -> Result<ArrayView3<'_, u8>> {
        Ok(ArrayView3::from_shape(
            (self.height, self.width, self.channels.count()),
            &self.data,
        )?)
    }

    /// Mutable 3-D `(height, width, channels)` view.
    pub fn view_mut(&mut self) -> Result<ArrayViewMut3<'_, u8>> {
        Ok(ArrayViewMut3::from_shape(
            (self.height, self.width, self.channels.count()),
            &mut self.data,
        )?)
    }
}
