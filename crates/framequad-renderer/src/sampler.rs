//! Sampler state shared by the GPU sampler and the CPU reference stages.

use framequad_config::schema::{AddressMode, FilterMode, SamplerConfig};

/// Filtering and wrap state bound at group 0, binding 2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerState {
    pub address_mode_u: AddressMode,
    pub address_mode_v: AddressMode,
    pub address_mode_w: AddressMode,
    pub mag_filter: FilterMode,
    pub min_filter: FilterMode,
    pub mipmap_filter: FilterMode,
    pub lod_min_clamp: f32,
    pub lod_max_clamp: f32,
}

impl SamplerState {
    pub fn from_config(config: &SamplerConfig) -> Self {
        Self {
            address_mode_u: config.address_mode_u,
            address_mode_v: config.address_mode_v,
            address_mode_w: config.address_mode_w,
            mag_filter: config.mag_filter,
            min_filter: config.min_filter,
            mipmap_filter: config.mipmap_filter,
            lod_min_clamp: config.lod_min_clamp,
            lod_max_clamp: config.lod_max_clamp,
        }
    }

    /// Same filter and wrap mode on every axis.
    pub fn uniform(address_mode: AddressMode, filter: FilterMode) -> Self {
        Self {
            address_mode_u: address_mode,
            address_mode_v: address_mode,
            address_mode_w: address_mode,
            mag_filter: filter,
            min_filter: filter,
            mipmap_filter: filter,
            ..Self::default()
        }
    }

    pub fn descriptor(&self) -> wgpu::SamplerDescriptor<'static> {
        wgpu::SamplerDescriptor {
            label: Some("sample frame sampler"),
            address_mode_u: to_wgpu_address(self.address_mode_u),
            address_mode_v: to_wgpu_address(self.address_mode_v),
            address_mode_w: to_wgpu_address(self.address_mode_w),
            mag_filter: to_wgpu_filter(self.mag_filter),
            min_filter: to_wgpu_filter(self.min_filter),
            mipmap_filter: to_wgpu_filter(self.mipmap_filter),
            lod_min_clamp: self.lod_min_clamp,
            lod_max_clamp: self.lod_max_clamp,
            ..Default::default()
        }
    }
}

impl Default for SamplerState {
    fn default() -> Self {
        Self::from_config(&SamplerConfig::default())
    }
}

fn to_wgpu_address(mode: AddressMode) -> wgpu::AddressMode {
    match mode {
        AddressMode::ClampToEdge => wgpu::AddressMode::ClampToEdge,
        AddressMode::Repeat => wgpu::AddressMode::Repeat,
        AddressMode::MirrorRepeat => wgpu::AddressMode::MirrorRepeat,
    }
}

fn to_wgpu_filter(mode: FilterMode) -> wgpu::FilterMode {
    match mode {
        FilterMode::Nearest => wgpu::FilterMode::Nearest,
        FilterMode::Linear => wgpu::FilterMode::Linear,
    }
}
