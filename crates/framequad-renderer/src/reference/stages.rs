use crate::matrix;
use crate::sampler::SamplerState;
use crate::uniforms::{Globals, Locals};

use super::texture::TextureImage;

/// The six quad corners indexed by `vertex_index`, same order as the shader.
pub const QUAD: [[f32; 2]; 6] = [
    [0.0, 1.0],
    [1.0, 1.0],
    [1.0, 0.0],
    [1.0, 0.0],
    [0.0, 1.0],
    [0.0, 0.0],
];

/// What the vertex stage hands to the rasterizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexOutput {
    pub clip_position: [f32; 4],
    pub uv: [f32; 2],
}

/// Vertex stage: `globals.transform * locals.bounds * vec4(quad[index], 0, 1)`.
///
/// Returns `None` for an index outside the 6-vertex draw.
pub fn vertex(index: u32, locals: &Locals, globals: &Globals) -> Option<VertexOutput> {
    let position = *QUAD.get(index as usize)?;
    let mvp = matrix::mul(&globals.transform, &locals.bounds);
    Some(VertexOutput {
        clip_position: matrix::transform(&mvp, [position[0], position[1], 0.0, 1.0]),
        uv: position,
    })
}

/// Fragment stage: sampled RGB with alpha forced to 1.
pub fn fragment(uv: [f32; 2], texture: &TextureImage, sampler: &SamplerState) -> [f32; 4] {
    let [r, g, b, _] = texture.sample(uv, sampler);
    [r, g, b, 1.0]
}
