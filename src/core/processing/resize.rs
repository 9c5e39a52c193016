//! Exact-size resizing and the shared resampling primitive.
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use tracing::debug;

use crate::error::{Error, Result};
use crate::image::ImageBuffer;
use crate::types::{Channels, Size};

fn pixel_type(channels: Channels) -> PixelType {
    match channels {
        Channels::Rgb => PixelType::U8x3,
        Channels::Rgba => PixelType::U8x4,
    }
}

/// Resamples `image` to exactly `target_cols` x `target_rows` with the given
/// convolution kernel. Channels are resampled independently; alpha is not
/// premultiplied.
pub(crate) fn resample(
    image: &ImageBuffer,
    target_cols: usize,
    target_rows: usize,
    filter: FilterType,
) -> Result<ImageBuffer> {
    let resize_options = ResizeOptions::new()
        .resize_alg(ResizeAlg::Convolution(filter))
        .use_alpha(false);
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        image.width() as u32,
        image.height() as u32,
        image.as_bytes().to_vec(),
        pixel_type(image.channels()),
    )?;
    let mut dst_image = Image::new(
        target_cols as u32,
        target_rows as u32,
        pixel_type(image.channels()),
    );
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    ImageBuffer::from_vec(
        target_cols,
        target_rows,
        image.channels(),
        dst_image.into_vec(),
    )
}

/// Resizes `image` to exactly `size`, stretching or shrinking without
/// preserving aspect ratio. Uses area-averaging when the target is smaller
/// than the source in either dimension, cubic otherwise.
pub fn resize_image(image: &ImageBuffer, size: Size) -> Result<ImageBuffer> {
    if size.width == 0 || size.height == 0 {
        return Err(Error::ZeroSize {
            width: size.width,
            height: size.height,
        });
    }

    let filter = if size.width < image.width() || size.height < image.height() {
        FilterType::Box
    } else {
        FilterType::CatmullRom
    };

    debug!(
        "Resizing {}x{} to {} with {:?}",
        image.width(),
        image.height(),
        size,
        filter
    );
    resample(image, size.width, size.height, filter)
}
