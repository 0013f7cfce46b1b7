use tracing::{debug, warn};

use crate::gpu::RendererError;
use crate::sample::Sample;
use crate::staging::{StagedFrame, Stager};

/// Format of every stream's frame texture.
pub(crate) const FRAME_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Bgra8UnormSrgb;

/// GPU state of one video stream at one resolution.
pub(crate) struct Stream {
    pub texture: wgpu::Texture,
    pub bind_group: wgpu::BindGroup,
    pub stager: Stager,
    /// The sample most recently drawn.
    pub cur_sample: Option<Sample>,
    /// Id of the sample whose pixels are in `texture`.
    pub shown: Option<u64>,
    pub width: u32,
    pub height: u32,
}

impl Stream {
    pub fn new(
        device: &wgpu::Device,
        frame_layout: &wgpu::BindGroupLayout,
        stream_id: u64,
        width: u32,
        height: u32,
    ) -> Result<Self, RendererError> {
        let max = device.limits().max_texture_dimension_2d;
        if width > max || height > max {
            return Err(RendererError::InvalidSample(format!(
                "{width}x{height} frame exceeds the device texture limit of {max}"
            )));
        }

        let stager = Stager::spawn(stream_id)?;

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("sample frame texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: FRAME_FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("sample frame bind group"),
            layout: frame_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: crate::bindings::FRAME_TEXTURE.binding,
                resource: wgpu::BindingResource::TextureView(&view),
            }],
        });

        debug!("created stream {stream_id} at {width}x{height}");
        Ok(Self {
            texture,
            bind_group,
            stager,
            cur_sample: None,
            shown: None,
            width,
            height,
        })
    }

    /// Copy a staged frame into the frame texture.
    ///
    /// Frames older than the one already in the texture are dropped; the
    /// worker can finish a pushed sample after a later preroll was shown.
    pub fn upload(&mut self, queue: &wgpu::Queue, frame: &StagedFrame) {
        if self.shown.is_some_and(|shown| frame.sample_id <= shown) {
            debug!(
                "skipping staged sample {}, texture already holds {:?}",
                frame.sample_id, self.shown
            );
            return;
        }
        if (frame.width, frame.height) != (self.width, self.height) {
            warn!(
                "dropping staged sample {}: {}x{} does not match stream texture {}x{}",
                frame.sample_id, frame.width, frame.height, self.width, self.height
            );
            return;
        }

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &frame.bgra,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * self.width),
                rows_per_image: Some(self.height),
            },
            wgpu::Extent3d {
                width: self.width,
                height: self.height,
                depth_or_array_layers: 1,
            },
        );
        self.shown = Some(frame.sample_id);
    }
}
