use crate::schema::{FramequadConfig, LOG_LEVELS};

pub(crate) fn validate_logging(errors: &mut Vec<String>, config: &FramequadConfig) {
    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(format!(
            "logging.level = {:?} must be one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }
}
