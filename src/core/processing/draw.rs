//! Annotation drawing: bounding-box outlines.
use crate::image::ImageBuffer;
use crate::types::{Channels, RGB_GREEN, RGBA_GREEN};

/// Draws a 2-pixel-thick green rectangle outline from `(x1, y1)` to
/// `(x2, y2)` in place. The stroke covers the rectangle edge plus one pixel
/// inward; coordinates beyond the image are clipped. The color matches the
/// channel count: `RGB_GREEN` or (fully opaque) `RGBA_GREEN`.
pub fn draw_bounding_box(image: &mut ImageBuffer, x1: usize, y1: usize, x2: usize, y2: usize) {
    let color: &[u8] = match image.channels() {
        Channels::Rgb => &RGB_GREEN,
        Channels::Rgba => &RGBA_GREEN,
    };
    for inset in 0..2usize {
        draw_rect_outline(
            image,
            x1 + inset,
            y1 + inset,
            x2.saturating_sub(inset),
            y2.saturating_sub(inset),
            color,
        );
    }
}

fn draw_rect_outline(
    image: &mut ImageBuffer,
    x1: usize,
    y1: usize,
    x2: usize,
    y2: usize,
    color: &[u8],
) {
    if x1 > x2 || y1 > y2 {
        return;
    }
    let width = image.width();
    let height = image.height();
    let stride = image.channels().count();
    let data = image.as_bytes_mut();

    let mut put = |x: usize, y: usize| {
        let offset = (y * width + x) * stride;
        data[offset..offset + stride].copy_from_slice(color);
    };

    for x in x1..=x2.min(width.saturating_sub(1)) {
        if y1 < height {
            put(x, y1);
        }
        if y2 < height {
            put(x, y2);
        }
    }
    for y in y1..=y2.min(height.saturating_sub(1)) {
        if x1 < width {
            put(x1, y);
        }
        if x2 < width {
            put(x2, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_is_green_and_interior_untouched() {
        let mut img = ImageBuffer::new(20, 20, Channels::Rgb).unwrap();
        draw_bounding_box(&mut img, 5, 5, 15, 15);
        // Edge and one pixel inward on each side.
        assert_eq!(img.pixel(5, 10), Some(&RGB_GREEN[..]));
        assert_eq!(img.pixel(6, 10), Some(&RGB_GREEN[..]));
        assert_eq!(img.pixel(15, 10), Some(&RGB_GREEN[..]));
        assert_eq!(img.pixel(14, 10), Some(&RGB_GREEN[..]));
        assert_eq!(img.pixel(10, 5), Some(&RGB_GREEN[..]));
        assert_eq!(img.pixel(10, 6), Some(&RGB_GREEN[..]));
        assert_eq!(img.pixel(10, 15), Some(&RGB_GREEN[..]));
        assert_eq!(img.pixel(10, 14), Some(&RGB_GREEN[..]));
        // Interior and exterior stay black.
        assert_eq!(img.pixel(10, 10), Some(&[0u8, 0, 0][..]));
        assert_eq!(img.pixel(7, 7), Some(&[0u8, 0, 0][..]));
        assert_eq!(img.pixel(4, 10), Some(&[0u8, 0, 0][..]));
        assert_eq!(img.pixel(16, 10), Some(&[0u8, 0, 0][..]));
    }

    #[test]
    fn rgba_outline_uses_opaque_green() {
        let mut img = ImageBuffer::new(10, 10, Channels::Rgba).unwrap();
        draw_bounding_box(&mut img, 2, 2, 7, 7);
        assert_eq!(img.pixel(2, 2), Some(&RGBA_GREEN[..]));
        assert_eq!(img.pixel(2, 2).unwrap()[3], 255);
        assert_eq!(img.pixel(5, 5), Some(&[0u8, 0, 0, 0][..]));
    }

    #[test]
    fn coordinates_beyond_image_are_clipped() {
        let mut img = ImageBuffer::new(20, 20, Channels::Rgb).unwrap();
        draw_bounding_box(&mut img, 18, 18, 30, 30);
        assert_eq!(img.pixel(18, 18), Some(&RGB_GREEN[..]));
        assert_eq!(img.pixel(19, 19), Some(&RGB_GREEN[..]));
        assert_eq!(img.pixel(17, 17), Some(&[0u8, 0, 0][..]));
    }

    #[test]
    fn degenerate_box_draws_single_block() {
        let mut img = ImageBuffer::new(8, 8, Channels::Rgb).unwrap();
        draw_bounding_box(&mut img, 3, 3, 3, 3);
        assert_eq!(img.pixel(3, 3), Some(&RGB_GREEN[..]));
        assert_eq!(img.pixel(4, 3), Some(&[0u8, 0, 0][..]));
    }
}
