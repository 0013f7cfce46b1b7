//! framequad configuration.
//!
//! TOML-based configuration for the sample renderer: sampler state, output
//! target, input stream format and logging. Every section uses serde
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use framequad_config::{config_to_json, load_config};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod colors;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{FramequadConfig, CONFIG_SCHEMA_VERSION};

use framequad_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path, creating it if missing.
pub fn load_config() -> Result<FramequadConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path (the `--config` override).
pub fn load_config_from(path: &Path) -> Result<FramequadConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &FramequadConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = FramequadConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"sampler\""));
        assert!(json.contains("\"output\""));
        assert!(json.contains("\"stream\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = FramequadConfig::default();
        let json = config_to_json(&config);
        let parsed: FramequadConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.output.width, 1280);
        assert_eq!(parsed.output.clear_color, "#000000");
        assert_eq!(parsed.sampler.lod_max_clamp, 32.0);
    }

    #[test]
    fn load_config_from_missing_path_fails() {
        let result = load_config_from(Path::new("/tmp/nonexistent_framequad_config.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
