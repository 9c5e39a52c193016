//! Alpha compositing of an RGBA overlay onto a background region.
use ndarray::s;
use tracing::debug;

use crate::error::{Error, Result};
use crate::image::ImageBuffer;
use crate::types::{BoundingBox, Channels};

/// Blends `new_image` onto `bg_image` within `position`, weighting each
/// pixel by the overlay's alpha channel normalized to `[0, 1]`:
/// `out = alpha * fg + (1 - alpha) * bg` per color channel.
///
/// The overlay must be RGBA and exactly the size of the target rectangle,
/// which must lie inside the background. The background may be RGB or RGBA;
/// its alpha channel, if present, is left untouched.
pub fn add_image(
    new_image: &ImageBuffer,
    position: BoundingBox,
    bg_image: &mut ImageBuffer,
) -> Result<()> {
    if new_image.channels() != Channels::Rgba {
        return Err(Error::ChannelMismatch {
            expected: 4,
            actual: new_image.channels().count(),
        });
    }

    let BoundingBox { x1, y1, x2, y2 } = position;
    let region_ok = x1 <= x2
        && y1 <= y2
        && x2 - x1 == new_image.width()
        && y2 - y1 == new_image.height()
        && x2 <= bg_image.width()
        && y2 <= bg_image.height();
    if !region_ok {
        return Err(Error::RegionMismatch {
            x1,
            y1,
            x2,
            y2,
            width: new_image.width(),
            height: new_image.height(),
        });
    }

    debug!(
        "Compositing {}x{} overlay at {}",
        new_image.width(),
        new_image.height(),
        position
    );

    let fg = new_image.view()?;
    let mut bg = bg_image.view_mut()?;
    let mut region = bg.slice_mut(s![y1..y2, x1..x2, ..]);
    for y in 0..fg.dim().0 {
        for x in 0..fg.dim().1 {
            let alpha = fg[[y, x, 3]] as f64 / 255.0;
            for channel in 0..3 {
                let over = fg[[y, x, channel]] as f64;
                let under = region[[y, x, channel]] as f64;
                region[[y, x, channel]] = (alpha * over + (1.0 - alpha) * under).round() as u8;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: usize, height: usize, channels: Channels, sample: &[u8]) -> ImageBuffer {
        let data: Vec<u8> = sample
            .iter()
            .copied()
            .cycle()
            .take(width * height * channels.count())
            .collect();
        ImageBuffer::from_vec(width, height, channels, data).unwrap()
    }

    #[test]
    fn opaque_overlay_replaces_region_exactly() {
        let fg = solid(2, 2, Channels::Rgba, &[10, 20, 30, 255]);
        let mut bg = solid(4, 4, Channels::Rgb, &[100, 100, 100]);
        add_image(&fg, BoundingBox::new(1, 1, 3, 3), &mut bg).unwrap();
        assert_eq!(bg.pixel(1, 1), Some(&[10u8, 20, 30][..]));
        assert_eq!(bg.pixel(2, 2), Some(&[10u8, 20, 30][..]));
        // Outside the rectangle stays put.
        assert_eq!(bg.pixel(0, 0), Some(&[100u8, 100, 100][..]));
        assert_eq!(bg.pixel(3, 3), Some(&[100u8, 100, 100][..]));
    }

    #[test]
    fn transparent_overlay_leaves_background() {
        let fg = solid(2, 2, Channels::Rgba, &[10, 20, 30, 0]);
        let mut bg = solid(4, 4, Channels::Rgb, &[100, 100, 100]);
        add_image(&fg, BoundingBox::new(0, 0, 2, 2), &mut bg).unwrap();
        assert_eq!(bg.pixel(0, 0), Some(&[100u8, 100, 100][..]));
        assert_eq!(bg.pixel(1, 1), Some(&[100u8, 100, 100][..]));
    }

    #[test]
    fn half_alpha_blends_channels() {
        let fg = solid(1, 1, Channels::Rgba, &[200, 200, 200, 128]);
        let mut bg = solid(2, 2, Channels::Rgb, &[100, 100, 100]);
        add_image(&fg, BoundingBox::new(0, 0, 1, 1), &mut bg).unwrap();
        // 128/255 * 200 + 127/255 * 100 = 150.196... -> 150
        assert_eq!(bg.pixel(0, 0), Some(&[150u8, 150, 150][..]));
    }

    #[test]
    fn background_alpha_untouched() {
        let fg = solid(2, 2, Channels::Rgba, &[10, 20, 30, 255]);
        let mut bg = solid(2, 2, Channels::Rgba, &[100, 100, 100, 7]);
        add_image(&fg, BoundingBox::new(0, 0, 2, 2), &mut bg).unwrap();
        assert_eq!(bg.pixel(0, 0), Some(&[10u8, 20, 30, 7][..]));
    }

    #[test]
    fn rgb_overlay_rejected() {
        let fg = solid(2, 2, Channels::Rgb, &[10, 20, 30]);
        let mut bg = solid(4, 4, Channels::Rgb, &[100, 100, 100]);
        assert!(matches!(
            add_image(&fg, BoundingBox::new(0, 0, 2, 2), &mut bg),
            Err(Error::ChannelMismatch { .. })
        ));
    }

    #[test]
    fn mismatched_rectangle_rejected() {
        let fg = solid(2, 2, Channels::Rgba, &[10, 20, 30, 255]);
        let mut bg = solid(4, 4, Channels::Rgb, &[100, 100, 100]);
        assert!(matches!(
            add_image(&fg, BoundingBox::new(0, 0, 3, 2), &mut bg),
            Err(Error::RegionMismatch { .. })
        ));
    }

    #[test]
    fn out_of_bounds_rectangle_rejected() {
        let fg = solid(2, 2, Channels::Rgba, &[10, 20, 30, 255]);
        let mut bg = solid(3, 3, Channels::Rgb, &[100, 100, 100]);
        assert!(matches!(
            add_image(&fg, BoundingBox::new(2, 2, 4, 4), &mut bg),
            Err(Error::RegionMismatch { .. })
        ));
    }
}
