use framequad_config::colors::srgb_to_linear;
use framequad_config::schema::{AddressMode, FilterMode};

use crate::gpu::RendererError;
use crate::sample::{Frame, PixelFormat};
use crate::sampler::SamplerState;

/// Linear-light RGBA texels, rows top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureImage {
    width: u32,
    height: u32,
    texels: Vec<[f32; 4]>,
}

impl TextureImage {
    pub fn from_rgba(width: u32, height: u32, texels: Vec<[f32; 4]>) -> Result<Self, RendererError> {
        if width == 0 || height == 0 || texels.len() != width as usize * height as usize {
            return Err(RendererError::InvalidSample(format!(
                "{width}x{height} texture cannot hold {} texels",
                texels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            texels,
        })
    }

    /// Decode a frame the way an sRGB frame texture is read by the sampler.
    pub fn from_frame(frame: &Frame) -> Self {
        let texels = frame
            .pixels()
            .chunks_exact(4)
            .map(|px| {
                let [r, g, b, a] = match frame.format() {
                    PixelFormat::Bgra8 => [px[2], px[1], px[0], px[3]],
                    PixelFormat::Rgba8 => [px[0], px[1], px[2], px[3]],
                };
                [decode(r), decode(g), decode(b), a as f32 / 255.0]
            })
            .collect();
        Self {
            width: frame.width(),
            height: frame.height(),
            texels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn texel(&self, x: u32, y: u32) -> [f32; 4] {
        self.texels[(y * self.width + x) as usize]
    }

    /// Sample mip level 0 at `uv` using the sampler's `mag_filter`.
    pub fn sample(&self, uv: [f32; 2], sampler: &SamplerState) -> [f32; 4] {
        let u = uv[0] * self.width as f32;
        let v = uv[1] * self.height as f32;
        let (mode_u, mode_v) = (sampler.address_mode_u, sampler.address_mode_v);

        match sampler.mag_filter {
            FilterMode::Nearest => {
                let x = wrap(u.floor() as i64, self.width, mode_u);
                let y = wrap(v.floor() as i64, self.height, mode_v);
                self.texel(x, y)
            }
            FilterMode::Linear => {
                let (u, v) = (u - 0.5, v - 0.5);
                let (x0, y0) = (u.floor(), v.floor());
                let (fx, fy) = (u - x0, v - y0);
                let (x0, y0) = (x0 as i64, y0 as i64);

                let xs = [wrap(x0, self.width, mode_u), wrap(x0 + 1, self.width, mode_u)];
                let ys = [wrap(y0, self.height, mode_v), wrap(y0 + 1, self.height, mode_v)];

                let top = lerp(self.texel(xs[0], ys[0]), self.texel(xs[1], ys[0]), fx);
                let bottom = lerp(self.texel(xs[0], ys[1]), self.texel(xs[1], ys[1]), fx);
                lerp(top, bottom, fy)
            }
        }
    }
}

/// Resolve a possibly out-of-range texel index.
pub fn wrap(index: i64, size: u32, mode: AddressMode) -> u32 {
    let size = i64::from(size.max(1));
    let wrapped = match mode {
        AddressMode::ClampToEdge => index.clamp(0, size - 1),
        AddressMode::Repeat => index.rem_euclid(size),
        AddressMode::MirrorRepeat => {
            let m = index.rem_euclid(2 * size);
            if m >= size {
                2 * size - 1 - m
            } else {
                m
            }
        }
    };
    wrapped as u32
}

/// 8-bit sRGB channel to linear light.
fn decode(value: u8) -> f32 {
    srgb_to_linear(f64::from(value) / 255.0) as f32
}

fn lerp(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        a[3] + (b[3] - a[3]) * t,
    ]
}
