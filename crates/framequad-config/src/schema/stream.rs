//! Input stream configuration types.

use serde::{Deserialize, Serialize};

/// Channel order of incoming frame pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    #[default]
    Bgra8,
    Rgba8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    pub pixel_format: InputFormat,
}
