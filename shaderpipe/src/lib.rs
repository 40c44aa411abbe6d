#![forbid(missing_docs)]
//! GLSL to SPIR-V and back, with interface reflection.
//!
//! shaderpipe compiles GLSL source into SPIR-V modules, extracts a
//! structured description of a module's external interface (descriptor
//! bindings, push constants, stage attributes), and recompiles modules
//! back into GLSL targeting a chosen output profile.
//!
//! ## Usage
//! Compile a shader with [`glsl_to_spirv_with_reflection`] to get a
//! [`CompiledShader`] holding the module words alongside the
//! [`ShaderReflection`](reflect::ShaderReflection) computed from exactly
//! those words, then feed the words to [`spirv_to_glsl`] to emit source
//! for a GL runtime.
//!
//! Compilation targets a [`VulkanVersion`], which drives both the
//! compiler's client environment and the module's SPIR-V version;
//! recompilation targets a [`GlslVersion`] output profile. The two are
//! independent axes.
//!
//! The glslang-backed compiler keeps process-wide state, so concurrent
//! compile calls are serialized internally; reflection and recompilation
//! are pure and reentrant.

/// Loading and version scanning of shader source text.
pub mod preprocess {
    pub use shaderpipe_preprocess::*;
}

/// Shader compilation and reflection.
pub mod reflect {
    pub use shaderpipe_reflect::error::*;

    pub use shaderpipe_reflect::front::{GlslangCompilation, ShaderCompilation};

    pub use shaderpipe_reflect::reflect::layout::{
        DescriptorBinding, DescriptorKind, PushConstantRange, StageAttribute,
    };
    pub use shaderpipe_reflect::reflect::{reflect_spirv, ShaderReflection};

    pub use shaderpipe_reflect::back::{spirv_to_glsl, CrossGlsl};
}

mod pipeline;

pub use pipeline::{
    glsl_to_spirv, glsl_to_spirv_with_reflection, spirv_to_glsl, CompiledShader,
    ShaderPipelineError,
};

pub use shaderpipe_common::{GlslVersion, ShaderStage, ShaderStageMask, VulkanVersion};
