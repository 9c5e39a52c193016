//! Uniform rescaling by an explicit, randomly drawn, or relative scale factor.
//!
//! Kernel policy: cubic (Catmull-Rom) when enlarging, area-averaging (box)
//! when shrinking or at identity scale.
use fast_image_resize::FilterType;
use rand::Rng;
use tracing::debug;

use crate::core::processing::resize::resample;
use crate::core::random::random_item;
use crate::error::{Error, Result};
use crate::image::ImageBuffer;

fn kernel_for_factor(scale_factor: f64) -> FilterType {
    if scale_factor > 1.0 {
        FilterType::CatmullRom
    } else {
        FilterType::Box
    }
}

/// Scales `image` uniformly in both dimensions by `scale_factor`.
/// Target dimensions are rounded; a factor that rounds either dimension
/// to zero is rejected.
pub fn rescale_image(image: &ImageBuffer, scale_factor: f64) -> Result<ImageBuffer> {
    if !scale_factor.is_finite() || scale_factor <= 0.0 {
        return Err(Error::InvalidScale {
            scale: scale_factor,
        });
    }
    let target_cols = (image.width() as f64 * scale_factor).round() as usize;
    let target_rows = (image.height() as f64 * scale_factor).round() as usize;
    if target_cols == 0 || target_rows == 0 {
        return Err(Error::InvalidScale {
            scale: scale_factor,
        });
    }

    debug!(
        "Rescaling {}x{} by {} to {}x{}",
        image.width(),
        image.height(),
        scale_factor,
        target_cols,
        target_rows
    );
    resample(image, target_cols, target_rows, kernel_for_factor(scale_factor))
}

/// Rescales by a factor picked uniformly at random from `scales`.
pub fn random_rescale<R: Rng + ?Sized>(
    rng: &mut R,
    image: &ImageBuffer,
    scales: &[f64],
) -> Result<ImageBuffer> {
    let scale_factor = *random_item(rng, scales).ok_or(Error::EmptyCollection)?;
    rescale_image(image, scale_factor)
}

/// Scales `image` so that its width becomes `base_scale * base_width`,
/// preserving aspect ratio. The kernel follows the derived factor, not
/// `base_scale` itself.
pub fn rescale_image_relative(
    image: &ImageBuffer,
    base_scale: f64,
    base_width: usize,
) -> Result<ImageBuffer> {
    let target_width = base_scale * base_width as f64;
    let target_factor = target_width / image.width() as f64;
    rescale_image(image, target_factor)
}

/// Rescales relative to `base_image`'s width by a base scale drawn uniformly
/// from the closed interval `scale_range`, rounded to `decimals` places.
pub fn random_rescale_relative<R: Rng + ?Sized>(
    rng: &mut R,
    image: &ImageBuffer,
    scale_range: (f64, f64),
    decimals: u32,
    base_image: &ImageBuffer,
) -> Result<ImageBuffer> {
    let (low, high) = scale_range;
    if !low.is_finite() || !high.is_finite() || low > high {
        return Err(Error::InvalidArgument {
            arg: "scale_range",
            value: format!("({low}, {high})"),
        });
    }
    let precision = 10f64.powi(decimals as i32);
    let base_scale = (rng.gen_range(low..=high) * precision).round() / precision;
    rescale_image_relative(image, base_scale, base_image.width())
}
