use std::collections::hash_map::Entry;
use std::collections::HashMap;

use framequad_common::Rect;
use tracing::{debug, info};
use wgpu::util::DeviceExt;

use super::stream::{Stream, FRAME_FORMAT};
use super::types::SampleDraw;
use crate::bindings::{self, FRAME_GROUP, SHARED_GROUP};
use crate::gpu::{RenderTarget, RendererError};
use crate::sampler::SamplerState;
use crate::shader::{self, FRAGMENT_ENTRY, QUAD_VERTEX_COUNT, VERTEX_ENTRY};
use crate::staging;
use crate::uniforms::{Globals, Locals, UNIFORM_SIZE};

/// Draws video samples into a render target, one textured quad per sample.
///
/// Streams are created the first time their id is drawn and recreated when
/// the sample resolution changes.
pub struct SamplePipeline {
    pipeline: wgpu::RenderPipeline,
    shared_bind_group: wgpu::BindGroup,
    frame_layout: wgpu::BindGroupLayout,
    locals: wgpu::Buffer,
    globals: wgpu::Buffer,
    streams: HashMap<u64, Stream>,
}

impl SamplePipeline {
    /// Create the pipeline for targets of `format`.
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat, sampler: &SamplerState) -> Self {
        let module = shader::create_module(device);

        let locals = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sample locals"),
            contents: bytemuck::bytes_of(&Locals::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let globals = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sample globals"),
            contents: bytemuck::bytes_of(&Globals::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let frame_sampler = device.create_sampler(&sampler.descriptor());

        let shared_layout = bindings::create_shared_layout(device);
        let frame_layout = bindings::create_frame_layout(device);

        let shared_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("sample shared bind group"),
            layout: &shared_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: bindings::LOCALS.binding,
                    resource: locals.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: bindings::GLOBALS.binding,
                    resource: globals.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: bindings::SAMPLER.binding,
                    resource: wgpu::BindingResource::Sampler(&frame_sampler),
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sample pipeline layout"),
            bind_group_layouts: &[&shared_layout, &frame_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sample pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &module,
                entry_point: Some(VERTEX_ENTRY),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                // Quad corners come from the vertex index.
                buffers: &[],
            },
            fragment: Some(wgpu::FragmentState {
                module: &module,
                entry_point: Some(FRAGMENT_ENTRY),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        info!(?format, frame_format = ?FRAME_FORMAT, "sample pipeline created");

        Self {
            pipeline,
            shared_bind_group,
            frame_layout,
            locals,
            globals,
            streams: HashMap::new(),
        }
    }

    /// Record one pass per draw into `encoder`.
    ///
    /// `clip` is the scissor rectangle in target pixels; draws outside it
    /// leave the target untouched. Samples already on screen are not staged
    /// again. Prerolled samples are staged on the calling thread so they show
    /// up in this very frame; all others go through the stream's worker and
    /// appear once it has finished with them.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        draws: &[SampleDraw],
        globals: Globals,
        clip: Rect<u32>,
        target: RenderTarget<'_>,
    ) -> Result<(), RendererError> {
        copy_uniform(device, encoder, "sample globals staging", &globals, &self.globals);

        let clip = clip.clamp_to(target.width, target.height);
        if clip.is_empty() {
            debug!("clip rectangle is empty, skipping {} draws", draws.len());
            return Ok(());
        }

        for SampleDraw { sample, bounds } in draws {
            let (width, height) = (sample.width(), sample.height());

            let stream = match self.streams.entry(sample.stream_id) {
                Entry::Occupied(entry) => {
                    let stream = entry.into_mut();
                    if (stream.width, stream.height) != (width, height) {
                        info!(
                            "stream {} resized {}x{} -> {width}x{height}",
                            sample.stream_id, stream.width, stream.height
                        );
                        *stream = Stream::new(device, &self.frame_layout, sample.stream_id, width, height)?;
                    }
                    stream
                }
                Entry::Vacant(entry) => entry.insert(Stream::new(
                    device,
                    &self.frame_layout,
                    sample.stream_id,
                    width,
                    height,
                )?),
            };

            let is_new = stream.cur_sample.as_ref() != Some(sample);
            if is_new && !sample.from_preroll {
                stream.stager.submit(sample.clone());
            }

            let mut staged = stream.stager.latest();
            if is_new && sample.from_preroll {
                staged = Some(staging::stage(sample));
            }
            if let Some(frame) = staged {
                stream.upload(queue, &frame);
            }

            copy_uniform(
                device,
                encoder,
                "sample locals staging",
                &Locals::from_bounds(*bounds),
                &self.locals,
            );

            {
                let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("sample pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: target.view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                });
                pass.set_pipeline(&self.pipeline);
                pass.set_scissor_rect(clip.x, clip.y, clip.width, clip.height);
                pass.set_bind_group(SHARED_GROUP, &self.shared_bind_group, &[]);
                pass.set_bind_group(FRAME_GROUP, &stream.bind_group, &[]);
                pass.draw(0..QUAD_VERTEX_COUNT, 0..1);
            }

            stream.cur_sample = Some(sample.clone());
        }

        Ok(())
    }

    /// Drop a stream's texture and stop its worker.
    pub fn remove_stream(&mut self, stream_id: u64) -> bool {
        let removed = self.streams.remove(&stream_id).is_some();
        if removed {
            debug!("removed stream {stream_id}");
        }
        removed
    }

    /// Id of the sample currently held in a stream's texture, if any.
    pub fn shown_sample(&self, stream_id: u64) -> Option<u64> {
        self.streams.get(&stream_id).and_then(|s| s.shown)
    }

    pub fn stream_count(&self) -> usize {
        self.streams.len()
    }
}

/// Copy a uniform block through a throwaway buffer so that it lands in
/// command order relative to the surrounding passes.
fn copy_uniform<T: bytemuck::Pod>(
    device: &wgpu::Device,
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    value: &T,
    dst: &wgpu::Buffer,
) {
    let staging = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::bytes_of(value),
        usage: wgpu::BufferUsages::COPY_SRC,
    });
    encoder.copy_buffer_to_buffer(&staging, 0, dst, 0, UNIFORM_SIZE);
}
