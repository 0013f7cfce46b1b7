//! Configuration schema types for framequad.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod output;
mod sampler;
mod stream;

pub use logging::*;
pub use output::*;
pub use sampler::*;
pub use stream::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FramequadConfig {
    pub sampler: SamplerConfig,
    pub output: OutputConfig,
    pub stream: StreamConfig,
    pub logging: LoggingConfig,
}
