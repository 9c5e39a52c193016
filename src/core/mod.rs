//! Core building blocks: uniform random selection and the stateless
//! pixel transforms (rescale, resize, pad, composite, draw).
pub mod processing;
pub mod random;
