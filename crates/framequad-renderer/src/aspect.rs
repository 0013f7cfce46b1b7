//! Aspect-ratio fitting of a frame inside the space offered to it.

use framequad_common::{Rect, Size};

/// Largest size with the frame's aspect ratio that fits in `available`.
///
/// A frame with a zero dimension has no aspect ratio; `available` is
/// returned unchanged.
pub fn fit_to_aspect(frame_width: u32, frame_height: u32, available: Size) -> Size {
    if frame_width == 0 || frame_height == 0 || available.height <= 0.0 {
        return available;
    }

    let aspect = frame_width as f32 / frame_height as f32;
    let viewport_aspect = available.width / available.height;

    if viewport_aspect > aspect {
        Size::new(available.height * aspect, available.height)
    } else {
        Size::new(available.width, available.width / aspect)
    }
}

/// Rectangle of `size` centered in `within`.
pub fn centered(size: Size, within: Rect) -> Rect {
    Rect::new(
        within.x + (within.width - size.width) / 2.0,
        within.y + (within.height - size.height) / 2.0,
        size.width,
        size.height,
    )
}
