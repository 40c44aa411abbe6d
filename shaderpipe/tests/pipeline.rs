use shaderpipe::reflect::{reflect_spirv, DescriptorKind, ShaderCompileError};
use shaderpipe::{
    glsl_to_spirv, glsl_to_spirv_with_reflection, spirv_to_glsl, GlslVersion, ShaderStage,
    ShaderStageMask, VulkanVersion,
};

const TRIVIAL_VERTEX: &str = "\
#version 450
layout(location = 0) in vec3 a_pos;
void main() {
    gl_Position = vec4(a_pos, 1.0);
}
";

const FRAGMENT_WITH_SAMPLERS: &str = "\
#version 450
layout(location = 0) in vec2 v_uv;
layout(location = 0) out vec4 o_color;
layout(set = 1, binding = 2) uniform sampler2D u_textures[4];
void main() {
    o_color = texture(u_textures[0], v_uv);
}
";

const VERTEX_WITH_UBO_AND_PUSH: &str = "\
#version 450
layout(location = 0) in vec3 a_pos;
layout(set = 0, binding = 3) uniform Scene {
    vec4 tint;
} u_scene;
layout(push_constant) uniform Draw {
    mat4 transform;
} u_draw;
void main() {
    gl_Position = u_draw.transform * vec4(a_pos, 1.0) + u_scene.tint;
}
";

#[test]
pub fn trivial_vertex_shader_reflects_a_single_input() {
    let compiled = glsl_to_spirv_with_reflection(
        TRIVIAL_VERTEX,
        ShaderStage::Vertex,
        VulkanVersion::V1_0,
    )
    .unwrap();

    assert!(!compiled.spirv.is_empty());
    assert!(compiled.reflection.descriptor_bindings.is_empty());
    assert!(compiled.reflection.push_constants.is_empty());

    assert_eq!(compiled.reflection.inputs.len(), 1);
    let input = &compiled.reflection.inputs[0];
    assert_eq!(input.location, 0);
    assert_eq!(input.component_count, 3);
    assert_eq!(input.bit_width, 32);
    assert_eq!(input.name, "a_pos");
}

#[test]
pub fn uniform_buffer_and_push_constants_reflect() {
    let compiled = glsl_to_spirv_with_reflection(
        VERTEX_WITH_UBO_AND_PUSH,
        ShaderStage::Vertex,
        VulkanVersion::V1_1,
    )
    .unwrap();

    assert_eq!(compiled.reflection.descriptor_bindings.len(), 1);
    let scene = &compiled.reflection.descriptor_bindings[0];
    assert_eq!(scene.set, 0);
    assert_eq!(scene.binding, 3);
    assert_eq!(scene.kind, DescriptorKind::UniformBuffer);
    assert_eq!(scene.count, 1);
    assert_eq!(scene.stage_mask, ShaderStageMask::VERTEX);

    assert_eq!(compiled.reflection.push_constants.len(), 1);
    let push = &compiled.reflection.push_constants[0];
    assert_eq!(push.offset, 0);
    assert_eq!(push.size, 64);
    assert_eq!(push.stage_mask, ShaderStageMask::VERTEX);
}

#[test]
pub fn sampler_arrays_carry_their_literal_multiplicity() {
    let compiled = glsl_to_spirv_with_reflection(
        FRAGMENT_WITH_SAMPLERS,
        ShaderStage::Fragment,
        VulkanVersion::V1_0,
    )
    .unwrap();

    assert_eq!(compiled.reflection.descriptor_bindings.len(), 1);
    let textures = &compiled.reflection.descriptor_bindings[0];
    assert_eq!((textures.set, textures.binding), (1, 2));
    assert_eq!(textures.kind, DescriptorKind::CombinedImageSampler);
    assert_eq!(textures.count, 4);
    assert_eq!(textures.stage_mask, ShaderStageMask::FRAGMENT);

    assert_eq!(compiled.reflection.outputs.len(), 1);
    let output = &compiled.reflection.outputs[0];
    assert_eq!(output.location, 0);
    assert_eq!(output.component_count, 4);
    assert_eq!(output.bit_width, 32);
}

#[test]
pub fn bound_slots_are_unique_within_a_reflection() {
    let source = "\
#version 450
layout(set = 0, binding = 0) uniform A { vec4 a; } u_a;
layout(set = 0, binding = 1) uniform B { vec4 b; } u_b;
layout(location = 0) out vec4 o_color;
void main() {
    o_color = u_a.a + u_b.b;
}
";
    let compiled =
        glsl_to_spirv_with_reflection(source, ShaderStage::Fragment, VulkanVersion::V1_0).unwrap();

    let bindings = &compiled.reflection.descriptor_bindings;
    assert_eq!(bindings.len(), 2);
    for (i, first) in bindings.iter().enumerate() {
        for second in &bindings[i + 1..] {
            assert_ne!((first.set, first.binding), (second.set, second.binding));
        }
    }
}

#[test]
pub fn reflection_is_deterministic_for_a_module() {
    let spirv = glsl_to_spirv(
        VERTEX_WITH_UBO_AND_PUSH,
        ShaderStage::Vertex,
        VulkanVersion::V1_0,
    )
    .unwrap();

    let first = reflect_spirv(&spirv).unwrap();
    let second = reflect_spirv(&spirv).unwrap();
    assert_eq!(first, second);
}

#[test]
pub fn modules_for_newer_targets_still_reflect() {
    let compiled = glsl_to_spirv_with_reflection(
        TRIVIAL_VERTEX,
        ShaderStage::Vertex,
        VulkanVersion::V1_3,
    )
    .unwrap();
    assert_eq!(compiled.reflection.inputs.len(), 1);
}

#[test]
pub fn recompiled_source_follows_the_output_profile() {
    let spirv = glsl_to_spirv(TRIVIAL_VERTEX, ShaderStage::Vertex, VulkanVersion::V1_0).unwrap();

    let glsl_450 = spirv_to_glsl(&spirv, GlslVersion::V4_50).unwrap();
    assert!(glsl_450.contains("#version 450"));

    let glsl_330 = spirv_to_glsl(&spirv, GlslVersion::V3_30).unwrap();
    assert!(glsl_330.contains("#version 330"));

    let glsl_310 = spirv_to_glsl(&spirv, GlslVersion::V3_10).unwrap();
    assert!(glsl_310.contains("#version 310 es"));

    // Same module, same profile: identical output.
    assert_eq!(glsl_330, spirv_to_glsl(&spirv, GlslVersion::V3_30).unwrap());
}

#[test]
pub fn recompiled_source_scans_to_its_profile_version() {
    let spirv = glsl_to_spirv(TRIVIAL_VERTEX, ShaderStage::Vertex, VulkanVersion::V1_0).unwrap();
    let glsl = spirv_to_glsl(&spirv, GlslVersion::V3_30).unwrap();
    assert_eq!(shaderpipe::preprocess::source_version(&glsl).unwrap(), 330);
}

#[test]
pub fn compile_failures_carry_the_diagnostic() {
    let err = glsl_to_spirv(
        "#version 450\nvoid main() { undeclared(); }\n",
        ShaderStage::Vertex,
        VulkanVersion::V1_0,
    )
    .unwrap_err();
    assert!(matches!(err, ShaderCompileError::ShaderCCompileError(_)));
}

#[test]
pub fn malformed_version_directives_fail_before_compilation() {
    let err = glsl_to_spirv(
        "#version abc\nvoid main() {}\n",
        ShaderStage::Vertex,
        VulkanVersion::V1_0,
    )
    .unwrap_err();
    assert!(matches!(err, ShaderCompileError::PreprocessError(_)));
}
