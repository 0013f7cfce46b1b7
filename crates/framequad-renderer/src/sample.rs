//! Frames and the samples that carry them through a stream.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use framequad_config::schema::InputFormat;

use crate::gpu::RendererError;

/// Channel order of 8-bit, 4-channel pixel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelFormat {
    /// Matches the frame texture; uploaded as-is.
    #[default]
    Bgra8,
    /// Swizzled to BGRA before upload.
    Rgba8,
}

impl From<InputFormat> for PixelFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Bgra8 => PixelFormat::Bgra8,
            InputFormat::Rgba8 => PixelFormat::Rgba8,
        }
    }
}

pub const BYTES_PER_PIXEL: usize = 4;

/// A tightly packed image, rows top to bottom.
#[derive(Debug, Clone)]
pub struct Frame {
    pixels: Arc<[u8]>,
    width: u32,
    height: u32,
    format: PixelFormat,
}

impl Frame {
    pub fn new(
        pixels: impl Into<Arc<[u8]>>,
        width: u32,
        height: u32,
        format: PixelFormat,
    ) -> Result<Self, RendererError> {
        let pixels = pixels.into();
        if width == 0 || height == 0 {
            return Err(RendererError::InvalidSample(format!(
                "frame has zero size ({width}x{height})"
            )));
        }
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if pixels.len() != expected {
            return Err(RendererError::InvalidSample(format!(
                "{width}x{height} frame needs {expected} bytes, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            pixels,
            width,
            height,
            format,
        })
    }

    /// Single-color frame.
    pub fn solid(width: u32, height: u32, bgra: [u8; 4]) -> Result<Self, RendererError> {
        let count = width as usize * height as usize;
        let pixels: Vec<u8> = bgra.iter().copied().cycle().take(count * BYTES_PER_PIXEL).collect();
        Self::new(pixels, width, height, PixelFormat::Bgra8)
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }
}

/// One frame of a stream.
///
/// Equality only looks at `stream_id` and `sample_id`; pixel data is never
/// compared.
#[derive(Debug, Clone)]
pub struct Sample {
    pub frame: Frame,
    pub stream_id: u64,
    pub sample_id: u64,
    /// Produced while the stream was paused; shown without waiting for staging.
    pub from_preroll: bool,
}

impl Sample {
    pub fn width(&self) -> u32 {
        self.frame.width
    }

    pub fn height(&self) -> u32 {
        self.frame.height
    }
}

impl PartialEq for Sample {
    fn eq(&self, other: &Self) -> bool {
        self.stream_id == other.stream_id && self.sample_id == other.sample_id
    }
}

impl Eq for Sample {}

static NEXT_STREAM_ID: AtomicU64 = AtomicU64::new(1);

/// Numbers the samples of one stream.
#[derive(Debug)]
pub struct SampleFeed {
    stream_id: u64,
    next_sample_id: u64,
}

impl SampleFeed {
    /// Feed with a process-unique stream id.
    pub fn new() -> Self {
        Self::with_stream_id(NEXT_STREAM_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn with_stream_id(stream_id: u64) -> Self {
        Self {
            stream_id,
            next_sample_id: 0,
        }
    }

    pub fn stream_id(&self) -> u64 {
        self.stream_id
    }

    /// Sample taken while paused.
    pub fn preroll(&mut self, frame: Frame) -> Sample {
        self.next(frame, true)
    }

    /// Sample taken during playback.
    pub fn push(&mut self, frame: Frame) -> Sample {
        self.next(frame, false)
    }

    fn next(&mut self, frame: Frame, from_preroll: bool) -> Sample {
        let sample = Sample {
            frame,
            stream_id: self.stream_id,
            sample_id: self.next_sample_id,
            from_preroll,
        };
        self.next_sample_id += 1;
        sample
    }
}

impl Default for SampleFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(width: u32, height: u32) -> Frame {
        Frame::solid(width, height, [0, 0, 0, 255]).unwrap()
    }

    #[test]
    fn frame_rejects_wrong_length() {
        let err = Frame::new(vec![0u8; 15], 2, 2, PixelFormat::Bgra8).unwrap_err();
        assert!(matches!(err, RendererError::InvalidSample(_)));
        assert!(err.to_string().contains("16 bytes"));
    }

    #[test]
    fn frame_rejects_zero_size() {
        let err = Frame::new(Vec::new(), 0, 4, PixelFormat::Rgba8).unwrap_err();
        assert!(matches!(err, RendererError::InvalidSample(_)));
    }

    #[test]
    fn solid_frame_repeats_color() {
        let f = Frame::solid(3, 2, [1, 2, 3, 4]).unwrap();
        assert_eq!(f.pixels().len(), 24);
        assert!(f.pixels().chunks_exact(4).all(|px| px == [1, 2, 3, 4]));
    }

    #[test]
    fn feed_numbers_samples_consecutively() {
        let mut feed = SampleFeed::with_stream_id(7);
        let a = feed.preroll(frame(2, 2));
        let b = feed.push(frame(2, 2));
        let c = feed.push(frame(2, 2));
        assert_eq!((a.sample_id, b.sample_id, c.sample_id), (0, 1, 2));
        assert!(a.from_preroll);
        assert!(!b.from_preroll);
        assert!([a, b, c].iter().all(|s| s.stream_id == 7));
    }

    #[test]
    fn feeds_get_distinct_stream_ids() {
        let a = SampleFeed::new();
        let b = SampleFeed::new();
        assert_ne!(a.stream_id(), b.stream_id());
    }

    #[test]
    fn equality_ignores_pixels() {
        let a = Sample {
            frame: Frame::solid(1, 1, [255, 0, 0, 255]).unwrap(),
            stream_id: 1,
            sample_id: 3,
            from_preroll: false,
        };
        let b = Sample {
            frame: Frame::solid(4, 4, [0, 255, 0, 255]).unwrap(),
            stream_id: 1,
            sample_id: 3,
            from_preroll: true,
        };
        assert_eq!(a, b);
    }

    #[test]
    fn equality_distinguishes_streams() {
        let mut one = SampleFeed::with_stream_id(1);
        let mut two = SampleFeed::with_stream_id(2);
        assert_ne!(one.push(frame(1, 1)), two.push(frame(1, 1)));
    }

    #[test]
    fn input_format_converts() {
        assert_eq!(PixelFormat::from(InputFormat::Rgba8), PixelFormat::Rgba8);
        assert_eq!(PixelFormat::from(InputFormat::Bgra8), PixelFormat::Bgra8);
    }
}
