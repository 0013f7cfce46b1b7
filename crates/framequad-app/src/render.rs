//! Headless render loop: push frames through one stream and read back the
//! final target.

use std::path::Path;
use std::time::Duration;

use framequad_common::{FramequadError, Rect, Result, Size};
use framequad_config::colors::{hex_to_rgb, srgb_to_linear};
use framequad_config::schema::OutputFormat;
use framequad_config::FramequadConfig;
use framequad_renderer::aspect::{centered, fit_to_aspect};
use framequad_renderer::{
    Frame, GpuContext, Globals, OffscreenTarget, PixelFormat, Sample, SampleDraw, SampleFeed,
    SamplePipeline, SamplerState,
};

use crate::source;

/// How long to wait for the staging worker to deliver the last sample.
const SETTLE_TIMEOUT: Duration = Duration::from_secs(2);
const SETTLE_POLL: Duration = Duration::from_millis(5);

/// Frames fed into the stream.
pub enum Source {
    Still(Frame),
    Pattern(PixelFormat),
}

impl Source {
    pub fn frame(&self, index: u32) -> Result<Frame> {
        match self {
            Source::Still(frame) => Ok(frame.clone()),
            Source::Pattern(format) => source::test_pattern(
                source::PATTERN_WIDTH,
                source::PATTERN_HEIGHT,
                index,
                *format,
            ),
        }
    }
}

/// Target size and output path for one run.
pub struct RenderJob<'a> {
    pub width: u32,
    pub height: u32,
    pub frames: u32,
    pub output: &'a Path,
}

pub fn texture_format(format: OutputFormat) -> wgpu::TextureFormat {
    match format {
        OutputFormat::Bgra8UnormSrgb => wgpu::TextureFormat::Bgra8UnormSrgb,
        OutputFormat::Rgba8UnormSrgb => wgpu::TextureFormat::Rgba8UnormSrgb,
        OutputFormat::Bgra8Unorm => wgpu::TextureFormat::Bgra8Unorm,
        OutputFormat::Rgba8Unorm => wgpu::TextureFormat::Rgba8Unorm,
    }
}

/// Clear color for the target. Hex colors are sRGB encoded; sRGB targets
/// expect linear values.
pub fn clear_color(hex: &str, srgb_target: bool) -> wgpu::Color {
    let [r, g, b] = hex_to_rgb(hex).unwrap_or([0.0; 3]);
    let channel = |c: f64| if srgb_target { srgb_to_linear(c) } else { c };
    wgpu::Color {
        r: channel(r),
        g: channel(g),
        b: channel(b),
        a: 1.0,
    }
}

/// Reorder read-back pixels to RGBA in place.
pub fn to_rgba(pixels: &mut [u8], format: wgpu::TextureFormat) {
    if matches!(
        format,
        wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Bgra8UnormSrgb
    ) {
        for px in pixels.chunks_exact_mut(4) {
            px.swap(0, 2);
        }
    }
}

/// Where a frame lands in a `width` x `height` target.
pub fn frame_bounds(frame: &Frame, width: u32, height: u32) -> Rect {
    let available = Size::new(width as f32, height as f32);
    let size = fit_to_aspect(frame.width(), frame.height(), available);
    centered(size, Rect::with_size(available))
}

pub fn run(ctx: &GpuContext, config: &FramequadConfig, source: &Source, job: &RenderJob) -> Result<()> {
    let format = texture_format(config.output.format);
    let target = OffscreenTarget::new(&ctx.device, job.width, job.height, format);
    let sampler = SamplerState::from_config(&config.sampler);
    let mut pipeline = SamplePipeline::new(&ctx.device, format, &sampler);
    let clear = clear_color(&config.output.clear_color, format.is_srgb());
    let mut feed = SampleFeed::new();

    let mut last = None;
    for index in 0..job.frames {
        let frame = source.frame(index)?;
        let sample = if index == 0 {
            feed.preroll(frame)
        } else {
            feed.push(frame)
        };
        draw(ctx, &mut pipeline, &target, clear, &sample)?;
        last = Some(sample);
    }

    // Pushed samples reach the texture asynchronously.
    if let Some(sample) = &last {
        let started = std::time::Instant::now();
        while pipeline.shown_sample(sample.stream_id) != Some(sample.sample_id) {
            if started.elapsed() > SETTLE_TIMEOUT {
                tracing::warn!("sample {} was not staged in time", sample.sample_id);
                break;
            }
            std::thread::sleep(SETTLE_POLL);
            draw(ctx, &mut pipeline, &target, clear, sample)?;
        }
    }

    let mut pixels = target
        .read_pixels(&ctx.device, &ctx.queue)
        .map_err(|e| FramequadError::Renderer(e.to_string()))?;
    to_rgba(&mut pixels, format);
    source::save_png(job.output, job.width, job.height, &pixels)?;

    tracing::info!(
        "Wrote {} ({}x{}, {} frames)",
        job.output.display(),
        job.width,
        job.height,
        job.frames
    );
    Ok(())
}

fn draw(
    ctx: &GpuContext,
    pipeline: &mut SamplePipeline,
    target: &OffscreenTarget,
    clear: wgpu::Color,
    sample: &Sample,
) -> Result<()> {
    let mut encoder = ctx
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("framequad frame encoder"),
        });
    target.clear(&mut encoder, clear);

    let draws = [SampleDraw {
        sample: sample.clone(),
        bounds: frame_bounds(&sample.frame, target.width(), target.height()),
    }];
    pipeline
        .draw(
            &ctx.device,
            &ctx.queue,
            &mut encoder,
            &draws,
            Globals::orthographic(target.width(), target.height()),
            Rect::new(0, 0, target.width(), target.height()),
            target.as_target(),
        )
        .map_err(|e| FramequadError::Renderer(e.to_string()))?;

    ctx.queue.submit(Some(encoder.finish()));
    Ok(())
}
