//! Centered constant-color padding to a strictly larger canvas.
use tracing::info;

use crate::error::{Error, Result};
use crate::image::ImageBuffer;
use crate::types::Size;

/// Pads `image` to exactly `size` by centering it on a black canvas.
/// The target must exceed the source in BOTH dimensions. Odd differences
/// put the smaller half on the left/top. Every border sample is zero, so
/// RGBA borders come out black with zero alpha.
pub fn pad_image(image: &ImageBuffer, size: Size) -> Result<ImageBuffer> {
    if size.width <= image.width() || size.height <= image.height() {
        return Err(Error::PadTargetTooSmall {
            target_width: size.width,
            target_height: size.height,
            source_width: image.width(),
            source_height: image.height(),
        });
    }

    let delta_w = size.width - image.width();
    let delta_h = size.height - image.height();
    let left = delta_w / 2;
    let top = delta_h / 2;

    info!(
        "Padding {}x{} to {}: left={}, top={}",
        image.width(),
        image.height(),
        size,
        left,
        top
    );

    let stride = image.channels().count();
    let src_row_len = image.width() * stride;
    let dst_row_len = size.width * stride;

    let mut padded = ImageBuffer::new(size.width, size.height, image.channels())?;
    let src = image.as_bytes();
    let dst = padded.as_bytes_mut();
    // Copy per row using slice copies to minimize per-pixel indexing
    for row in 0..image.height() {
        let src_offset = row * src_row_len;
        let dst_offset = (row + top) * dst_row_len + left * stride;
        dst[dst_offset..dst_offset + src_row_len]
            .copy_from_slice(&src[src_offset..src_offset + src_row_len]);
    }
    Ok(padded)
}
