//! Bind group layouts for the frame shader.
//!
//! Group 0 is shared by every frame drawn in a pass; group 1 is owned by a
//! single stream and holds its frame texture.

use crate::uniforms::UNIFORM_SIZE;

/// A `(group, binding)` slot in the shader interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub group: u32,
    pub binding: u32,
}

pub const LOCALS: Slot = Slot {
    group: 0,
    binding: 0,
};
pub const GLOBALS: Slot = Slot {
    group: 0,
    binding: 1,
};
pub const SAMPLER: Slot = Slot {
    group: 0,
    binding: 2,
};
pub const FRAME_TEXTURE: Slot = Slot {
    group: 1,
    binding: 0,
};

pub const SHARED_GROUP: u32 = 0;
pub const FRAME_GROUP: u32 = 1;

fn uniform_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::VERTEX,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: std::num::NonZeroU64::new(UNIFORM_SIZE),
        },
        count: None,
    }
}

/// Layout of group 0: `Locals`, `Globals`, sampler.
pub fn create_shared_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("sample shared bind group layout"),
        entries: &[
            // Bounds matrix
            uniform_entry(LOCALS.binding),
            // Transformation matrix
            uniform_entry(GLOBALS.binding),
            wgpu::BindGroupLayoutEntry {
                binding: SAMPLER.binding,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    })
}

/// Layout of group 1: the stream's frame texture.
pub fn create_frame_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("sample frame bind group layout"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: FRAME_TEXTURE.binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                view_dimension: wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
            count: None,
        }],
    })
}
