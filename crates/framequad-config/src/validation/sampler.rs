use crate::schema::FramequadConfig;

use super::helpers::validate_range_f32;

/// LOD clamps must be non-negative and ordered.
pub(crate) fn validate_sampler(errors: &mut Vec<String>, config: &FramequadConfig) {
    let sampler = &config.sampler;
    validate_range_f32(
        errors,
        "sampler.lod_min_clamp",
        sampler.lod_min_clamp,
        0.0,
        f32::MAX,
    );
    validate_range_f32(
        errors,
        "sampler.lod_max_clamp",
        sampler.lod_max_clamp,
        0.0,
        f32::MAX,
    );
    if sampler.lod_max_clamp < sampler.lod_min_clamp {
        errors.push(format!(
            "sampler.lod_max_clamp = {} is below sampler.lod_min_clamp = {}",
            sampler.lod_max_clamp, sampler.lod_min_clamp
        ));
    }
}
