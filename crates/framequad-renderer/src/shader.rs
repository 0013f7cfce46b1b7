//! WGSL source for the frame shader and its entry points.

/// Vertex + fragment stages, see `shaders/sample.wgsl`.
pub const SHADER_SOURCE: &str = include_str!("shaders/sample.wgsl");

pub const VERTEX_ENTRY: &str = "vs_main";
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// Vertices per frame draw (two triangles, no index buffer).
pub const QUAD_VERTEX_COUNT: u32 = 6;

pub(crate) fn create_module(device: &wgpu::Device) -> wgpu::ShaderModule {
    device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("sample shader"),
        source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use naga::{AddressSpace, ShaderStage};

    fn parse() -> naga::Module {
        naga::front::wgsl::parse_str(SHADER_SOURCE).expect("shader parses")
    }

    #[test]
    fn shader_validates() {
        let module = parse();
        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::empty(),
        );
        validator.validate(&module).expect("shader validates");
    }

    #[test]
    fn entry_points_match_constants() {
        let module = parse();
        let vs = module
            .entry_points
            .iter()
            .find(|ep| ep.stage == ShaderStage::Vertex)
            .unwrap();
        let fs = module
            .entry_points
            .iter()
            .find(|ep| ep.stage == ShaderStage::Fragment)
            .unwrap();
        assert_eq!(vs.name, VERTEX_ENTRY);
        assert_eq!(fs.name, FRAGMENT_ENTRY);
        assert_eq!(module.entry_points.len(), 2);
    }

    #[test]
    fn vertex_stage_takes_no_vertex_attributes() {
        let module = parse();
        let vs = module
            .entry_points
            .iter()
            .find(|ep| ep.stage == ShaderStage::Vertex)
            .unwrap();
        assert_eq!(vs.function.arguments.len(), 1);
        assert!(matches!(
            vs.function.arguments[0].binding,
            Some(naga::Binding::BuiltIn(naga::BuiltIn::VertexIndex))
        ));
    }

    #[test]
    fn globals_declare_expected_bindings() {
        let module = parse();
        let mut bindings: Vec<(String, u32, u32)> = module
            .global_variables
            .iter()
            .filter_map(|(_, var)| {
                let rb = var.binding.as_ref()?;
                Some((var.name.clone()?, rb.group, rb.binding))
            })
            .collect();
        bindings.sort_by_key(|(_, group, binding)| (*group, *binding));

        let expected = [
            ("locals", 0, 0),
            ("globals", 0, 1),
            ("frame_sampler", 0, 2),
            ("frame_texture", 1, 0),
        ];
        assert_eq!(bindings.len(), expected.len());
        for ((name, group, binding), (exp_name, exp_group, exp_binding)) in
            bindings.iter().zip(expected.iter())
        {
            assert_eq!(name, exp_name);
            assert_eq!(group, exp_group);
            assert_eq!(binding, exp_binding);
        }
    }

    #[test]
    fn uniform_blocks_are_in_uniform_space() {
        let module = parse();
        let uniforms = module
            .global_variables
            .iter()
            .filter(|(_, var)| var.space == AddressSpace::Uniform)
            .count();
        assert_eq!(uniforms, 2);
    }

    #[test]
    fn fragment_forces_opaque_alpha() {
        assert!(SHADER_SOURCE.contains("vec4<f32>(color.rgb, 1.0)"));
    }
}
