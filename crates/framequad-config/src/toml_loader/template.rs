//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# framequad configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[sampler]
# address_mode_u = "clamp_to_edge"   # clamp_to_edge, repeat, mirror_repeat
# address_mode_v = "clamp_to_edge"
# address_mode_w = "clamp_to_edge"
# mag_filter = "linear"              # nearest, linear
# min_filter = "linear"
# mipmap_filter = "linear"
# lod_min_clamp = 0.0                # >= 0.0
# lod_max_clamp = 32.0               # >= lod_min_clamp

[output]
# width = 1280                       # 1-8192
# height = 720                       # 1-8192
# format = "bgra8_unorm_srgb"        # bgra8_unorm_srgb, rgba8_unorm_srgb, bgra8_unorm, rgba8_unorm
# clear_color = "#000000"

[stream]
# pixel_format = "bgra8"             # bgra8, rgba8

[logging]
# level = "info"                     # trace, debug, info, warn, error
"##
    .to_string()
}
