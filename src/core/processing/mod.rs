//! Stateless pixel-level transforms: factor and relative rescaling,
//! exact-size resizing, centered padding, alpha compositing, and
//! bounding-box drawing.
pub mod composite;
pub mod draw;
pub mod padding;
pub mod rescale;
pub mod resize;
