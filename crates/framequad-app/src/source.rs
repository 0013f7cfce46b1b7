//! Where frames come from: a PNG on disk or a generated pattern.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use framequad_common::{FramequadError, Result};
use framequad_renderer::{Frame, PixelFormat};

/// Size of the generated test pattern.
pub const PATTERN_WIDTH: u32 = 640;
pub const PATTERN_HEIGHT: u32 = 360;

/// Decode a PNG into an RGBA frame.
pub fn load_png(path: &Path) -> Result<Frame> {
    let file = File::open(path)?;
    let mut decoder = png::Decoder::new(file);
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| FramequadError::Image(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| FramequadError::Image(e.to_string()))?;
    let data = &buf[..info.buffer_size()];

    let rgba: Vec<u8> = match info.color_type {
        png::ColorType::Rgba => data.to_vec(),
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0], px[1]])
            .collect(),
        png::ColorType::Grayscale => data.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        other => {
            return Err(FramequadError::Image(format!(
                "unsupported PNG color type {other:?}"
            )))
        }
    };

    tracing::info!("Loaded {} ({}x{})", path.display(), info.width, info.height);
    Frame::new(rgba, info.width, info.height, PixelFormat::Rgba8)
        .map_err(|e| FramequadError::Renderer(e.to_string()))
}

/// Write tightly packed RGBA rows as an 8-bit PNG.
pub fn save_png(path: &Path, width: u32, height: u32, rgba: &[u8]) -> Result<()> {
    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder
        .write_header()
        .map_err(|e| FramequadError::Image(e.to_string()))?;
    writer
        .write_image_data(rgba)
        .map_err(|e| FramequadError::Image(e.to_string()))?;
    writer
        .finish()
        .map_err(|e| FramequadError::Image(e.to_string()))
}

/// One frame of a moving gradient, in `format` channel order.
///
/// Red runs left to right, green top to bottom, and blue follows `index`.
pub fn test_pattern(width: u32, height: u32, index: u32, format: PixelFormat) -> Result<Frame> {
    let blue = (index.wrapping_mul(16) % 256) as u8;
    let shift = index.wrapping_mul(8);
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        let green = (y * 255 / height.max(1)) as u8;
        for x in 0..width {
            let red = ((x * 255 / width.max(1) + shift) % 256) as u8;
            let px = match format {
                PixelFormat::Rgba8 => [red, green, blue, 255],
                PixelFormat::Bgra8 => [blue, green, red, 255],
            };
            pixels.extend_from_slice(&px);
        }
    }
    Frame::new(pixels, width, height, format).map_err(|e| FramequadError::Renderer(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_has_requested_size_and_order() {
        let rgba = test_pattern(4, 2, 0, PixelFormat::Rgba8).unwrap();
        let bgra = test_pattern(4, 2, 0, PixelFormat::Bgra8).unwrap();
        assert_eq!(rgba.pixels().len(), 4 * 2 * 4);
        assert_eq!(rgba.format(), PixelFormat::Rgba8);

        let (a, b) = (&rgba.pixels()[12..16], &bgra.pixels()[12..16]);
        assert_eq!([a[0], a[1], a[2], a[3]], [b[2], b[1], b[0], b[3]]);
        assert_eq!(a[3], 255);
    }

    #[test]
    fn pattern_moves_between_frames() {
        let first = test_pattern(8, 8, 0, PixelFormat::Rgba8).unwrap();
        let second = test_pattern(8, 8, 1, PixelFormat::Rgba8).unwrap();
        assert_ne!(first.pixels(), second.pixels());
    }

    #[test]
    fn png_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        let rgba = [10, 20, 30, 255, 40, 50, 60, 128];
        save_png(&path, 2, 1, &rgba).unwrap();

        let frame = load_png(&path).unwrap();
        assert_eq!((frame.width(), frame.height()), (2, 1));
        assert_eq!(frame.format(), PixelFormat::Rgba8);
        assert_eq!(frame.pixels(), &rgba);
    }

    #[test]
    fn missing_png_is_io_error() {
        let err = load_png(Path::new("/nonexistent/frame.png")).unwrap_err();
        assert!(matches!(err, FramequadError::Io(_)));
    }
}
