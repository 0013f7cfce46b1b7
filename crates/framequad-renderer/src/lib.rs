pub mod aspect;
pub mod bindings;
pub mod gpu;
pub mod matrix;
pub mod pipeline;
pub mod reference;
pub mod sample;
pub mod sampler;
pub mod shader;
pub mod staging;
pub mod uniforms;

pub use framequad_config::schema::{AddressMode, FilterMode};
pub use gpu::{GpuContext, OffscreenTarget, RenderTarget, RendererError};
pub use pipeline::{SampleDraw, SamplePipeline};
pub use sample::{Frame, PixelFormat, Sample, SampleFeed};
pub use sampler::SamplerState;
pub use uniforms::{Globals, Locals};
