//! Full configuration validation.
//!
//! Each section has its own validator; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod helpers;
mod misc;
mod output;
mod sampler;


use crate::schema::FramequadConfig;
use framequad_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &FramequadConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sampler::validate_sampler(&mut errors, config);
    output::validate_output(&mut errors, config);
    misc::validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
