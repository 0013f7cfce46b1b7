//! Render target configuration types.

use serde::{Deserialize, Serialize};

/// Color format of the render target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Bgra8UnormSrgb,
    Rgba8UnormSrgb,
    Bgra8Unorm,
    Rgba8Unorm,
}

/// Offscreen render target settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub width: u32,
    pub height: u32,
    pub format: OutputFormat,
    /// Color the target is cleared to before frames are drawn.
    pub clear_color: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            format: OutputFormat::Bgra8UnormSrgb,
            clear_color: "#000000".into(),
        }
    }
}
