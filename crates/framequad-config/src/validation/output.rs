use crate::colors::is_hex_color;
use crate::schema::FramequadConfig;

use super::helpers::validate_range;

/// Largest texture dimension guaranteed by default wgpu limits.
const MAX_DIMENSION: u32 = 8192;

pub(crate) fn validate_output(errors: &mut Vec<String>, config: &FramequadConfig) {
    let output = &config.output;
    validate_range(errors, "output.width", output.width, 1, MAX_DIMENSION);
    validate_range(errors, "output.height", output.height, 1, MAX_DIMENSION);
    if !is_hex_color(&output.clear_color) {
        errors.push(format!(
            "output.clear_color = {:?} is not a #RRGGBB color",
            output.clear_color
        ));
    }
}
