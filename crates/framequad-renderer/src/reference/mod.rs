//! CPU reference for the two shader stages.
//!
//! Mirrors `shaders/sample.wgsl` closely enough to check the geometry and
//! color contract without a GPU.

mod stages;
mod texture;

pub use stages::*;
pub use texture::*;
