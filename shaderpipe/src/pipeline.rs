use shaderpipe_common::{GlslVersion, ShaderStage, VulkanVersion};
use shaderpipe_reflect::back;
use shaderpipe_reflect::error::{ShaderCompileError, ShaderDecompileError, ShaderReflectError};
use shaderpipe_reflect::front::GlslangCompilation;
use shaderpipe_reflect::reflect::{reflect_spirv, ShaderReflection};
use thiserror::Error;

/// Error type for the compile-and-reflect pipeline.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ShaderPipelineError {
    /// The source failed to compile.
    #[error("shader compile error")]
    CompileError(#[from] ShaderCompileError),
    /// The compiled module failed to reflect.
    #[error("shader reflect error")]
    ReflectError(#[from] ShaderReflectError),
    /// The module failed to recompile to source.
    #[error("shader decompile error")]
    DecompileError(#[from] ShaderDecompileError),
}

/// A compiled module together with the reflection computed from it.
///
/// The two fields are always mutually consistent: the reflection was
/// computed from exactly these words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledShader {
    /// The module, as SPIR-V words.
    pub spirv: Vec<u32>,
    /// Interface reflection of the module.
    pub reflection: ShaderReflection,
}

/// Compile GLSL source into a SPIR-V module for the given stage and
/// Vulkan target.
///
/// The glslang-backed compiler keeps process-wide state; concurrent calls
/// are serialized internally.
pub fn glsl_to_spirv(
    source: &str,
    stage: ShaderStage,
    target: VulkanVersion,
) -> Result<Vec<u32>, ShaderCompileError> {
    Ok(GlslangCompilation::compile(source, stage, target)?.into_words())
}

/// Compile GLSL source and reflect the resulting module's interface.
///
/// Both compilation and reflection failures surface as an explicit error;
/// nothing is swallowed into a default reflection.
pub fn glsl_to_spirv_with_reflection(
    source: &str,
    stage: ShaderStage,
    target: VulkanVersion,
) -> Result<CompiledShader, ShaderPipelineError> {
    let spirv = glsl_to_spirv(source, stage, target)?;
    let reflection = reflect_spirv(&spirv)?;
    Ok(CompiledShader { spirv, reflection })
}

/// Recompile a SPIR-V module to GLSL source targeting an output profile.
pub fn spirv_to_glsl(
    spirv: &[u32],
    version: GlslVersion,
) -> Result<String, ShaderDecompileError> {
    back::glsl::spirv_to_glsl(spirv, version)
}
