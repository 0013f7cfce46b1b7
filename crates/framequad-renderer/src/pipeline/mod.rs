//! Draws video samples as textured quads.
//!
//! One shared bind group (bounds, transform, sampler) serves every draw;
//! each stream owns a frame texture, its bind group and a staging worker.

mod renderer;
mod stream;
mod types;

pub use renderer::*;
pub use types::*;
