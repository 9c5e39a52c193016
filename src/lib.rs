#![doc = r#"
PIXELAUG — stateless image-manipulation utilities for dataset augmentation.

This crate provides a small set of single-purpose transforms over in-memory
RGB/RGBA pixel buffers: rescaling by a factor, resizing to an exact size,
centered padding, alpha compositing, and bounding-box drawing. There is no
pipeline and no shared state; every function is an independent transformation
of an [`ImageBuffer`] the caller owns.

Scope
-----
The crate does no file I/O and ships no CLI. It wraps an external resize
collaborator (`fast_image_resize`) for kernel-based resampling and `rand`
for uniform selection; randomized operations take the generator explicitly,
so they are reproducible with a seeded `StdRng`.

Quick start: rescale and pad
----------------------------
```rust
use pixelaug::{Channels, ImageBuffer, Size, pad_image, rescale_image};

fn main() -> pixelaug::Result<()> {
    let image = ImageBuffer::new(64, 48, Channels::Rgb)?;

    // Cubic upsampling for factors > 1, area-averaging otherwise.
    let doubled = rescale_image(&image, 2.0)?;
    assert_eq!(doubled.size(), Size::new(128, 96));

    // Center on a black canvas strictly larger than the source.
    let padded = pad_image(&doubled, Size::new(256, 256))?;
    assert_eq!(padded.size(), Size::new(256, 256));
    Ok(())
}
```

Randomized augmentation
-----------------------
```rust
use pixelaug::{Channels, ImageBuffer, random_rescale};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> pixelaug::Result<()> {
    let mut rng = StdRng::seed_from_u64(42);
    let image = ImageBuffer::new(32, 32, Channels::Rgb)?;
    let scaled = random_rescale(&mut rng, &image, &[0.5, 1.0, 2.0])?;
    assert_eq!(scaled.width(), scaled.height());
    Ok(())
}
```

Compositing and annotation
--------------------------
```rust
use pixelaug::{
    BoundingBox, Channels, ImageBuffer, add_image, draw_bounding_box,
};

fn main() -> pixelaug::Result<()> {
    let sprite = ImageBuffer::new(8, 8, Channels::Rgba)?;
    let mut canvas = ImageBuffer::new(32, 32, Channels::Rgb)?;

    add_image(&sprite, BoundingBox::new(4, 4, 12, 12), &mut canvas)?;
    draw_bounding_box(&mut canvas, 4, 4, 12, 12);
    Ok(())
}
```

Error handling
--------------
All fallible functions return [`Result`]; match on [`Error`] to handle
specific cases, e.g. a pad target that is not strictly larger than the
source, or a composite rectangle that does not match the overlay.

Useful modules
--------------
- [`core`](crate::core) — random selection and the pixel transforms.
- [`image`] — the `ImageBuffer` data model.
- [`types`] — `Size`, `BoundingBox`, `Channels`, and color constants.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod core;
pub mod error;
pub mod image;
pub mod types;

// Curated public API surface
// Types
pub use error::{Error, Result};
pub use image::ImageBuffer;
pub use types::{BoundingBox, Channels, RGB_BLACK, RGB_GREEN, RGBA_BLACK, RGBA_GREEN, Size};

// Random selection
pub use core::random::{random_item, random_key};

// Transforms
pub use core::processing::composite::add_image;
pub use core::processing::draw::draw_bounding_box;
pub use core::processing::padding::pad_image;
pub use core::processing::rescale::{
    random_rescale, random_rescale_relative, rescale_image, rescale_image_relative,
};
pub use core::processing::resize::resize_image;
