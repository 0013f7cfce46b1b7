//! Uniform blocks read by the vertex stage.
//!
//! Both blocks hold a single `mat4x4<f32>` (64 bytes) so they need no
//! padding to satisfy WGSL uniform layout rules.

use framequad_common::Rect;

use crate::matrix::{self, Mat4};

/// Per-draw block at group 0, binding 0.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Locals {
    /// Places the unit quad inside the frame's target rectangle.
    pub bounds: Mat4,
}

impl Locals {
    pub fn from_bounds(rect: Rect) -> Self {
        Self {
            bounds: matrix::bounds(rect),
        }
    }
}

impl Default for Locals {
    fn default() -> Self {
        Self {
            bounds: matrix::IDENTITY,
        }
    }
}

/// Per-pass block at group 0, binding 1.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Globals {
    /// Pixel space to clip space.
    pub transform: Mat4,
}

impl Globals {
    pub fn orthographic(width: u32, height: u32) -> Self {
        Self {
            transform: matrix::orthographic(width, height),
        }
    }
}

impl Default for Globals {
    fn default() -> Self {
        Self {
            transform: matrix::IDENTITY,
        }
    }
}

/// Size of either block in bytes.
pub const UNIFORM_SIZE: u64 = std::mem::size_of::<Mat4>() as u64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locals_size() {
        assert_eq!(std::mem::size_of::<Locals>(), 64); // 16 floats * 4 bytes
    }

    #[test]
    fn globals_size() {
        assert_eq!(std::mem::size_of::<Globals>(), 64);
    }

    #[test]
    fn uniform_size_matches_structs() {
        assert_eq!(UNIFORM_SIZE, std::mem::size_of::<Locals>() as u64);
    }

    #[test]
    fn defaults_are_identity() {
        assert_eq!(Locals::default().bounds, matrix::IDENTITY);
        assert_eq!(Globals::default().transform, matrix::IDENTITY);
    }

    #[test]
    fn locals_bytes_are_column_major() {
        let locals = Locals::from_bounds(Rect::new(1.0, 2.0, 3.0, 4.0));
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&locals));
        assert_eq!(floats[0], 3.0);
        assert_eq!(floats[5], 4.0);
        assert_eq!(floats[12], 1.0);
        assert_eq!(floats[13], 2.0);
        assert_eq!(floats[15], 1.0);
    }
}
