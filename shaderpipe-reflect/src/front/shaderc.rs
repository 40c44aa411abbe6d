use crate::error::ShaderCompileError;
use crate::front::ShaderCompilation;
use shaderc::{CompilationArtifact, CompileOptions, Limit, ShaderKind, SpirvVersion, TargetEnv};
use shaderpipe_common::{ShaderStage, VulkanVersion};
use shaderpipe_preprocess::source_version;
use std::sync::{Mutex, PoisonError};

// glslang keeps process-wide state around each compile; requests from
// concurrent call sites are serialized here. Reflection and recompilation
// have no such constraint.
static COMPILER_SERIAL: Mutex<()> = Mutex::new(());

/// A module compiled from GLSL source by glslang (shaderc).
pub struct GlslangCompilation {
    pub(crate) artifact: CompilationArtifact,
    /// Version number declared by the source's `#version` directive,
    /// `0` when the source declares none.
    pub source_version: u32,
}

impl GlslangCompilation {
    /// Tries to compile SPIR-V from the provided shader source.
    pub fn compile(
        source: &str,
        stage: ShaderStage,
        target: VulkanVersion,
    ) -> Result<Self, ShaderCompileError> {
        compile_spirv(source, stage, target)
    }

    /// The compiled module as SPIR-V words.
    pub fn as_binary(&self) -> &[u32] {
        self.artifact.as_binary()
    }

    /// The compiled module as an owned sequence of SPIR-V words.
    pub fn into_words(self) -> Vec<u32> {
        self.artifact.as_binary().to_vec()
    }
}

impl ShaderCompilation for GlslangCompilation {
    fn compile(
        source: &str,
        stage: ShaderStage,
        target: VulkanVersion,
    ) -> Result<Self, ShaderCompileError> {
        GlslangCompilation::compile(source, stage, target)
    }
}

pub(crate) fn shader_kind(stage: ShaderStage) -> ShaderKind {
    match stage {
        ShaderStage::Vertex => ShaderKind::Vertex,
        ShaderStage::TessControl => ShaderKind::TessControl,
        ShaderStage::TessEval => ShaderKind::TessEvaluation,
        ShaderStage::Geometry => ShaderKind::Geometry,
        ShaderStage::Fragment => ShaderKind::Fragment,
        ShaderStage::Compute => ShaderKind::Compute,
        ShaderStage::RayGeneration => ShaderKind::RayGeneration,
        ShaderStage::Intersection => ShaderKind::Intersection,
        ShaderStage::AnyHit => ShaderKind::AnyHit,
        ShaderStage::ClosestHit => ShaderKind::ClosestHit,
        ShaderStage::Miss => ShaderKind::Miss,
        ShaderStage::Callable => ShaderKind::Callable,
        ShaderStage::Task => ShaderKind::Task,
        ShaderStage::Mesh => ShaderKind::Mesh,
    }
}

const fn vulkan_api_version(major: u32, minor: u32) -> u32 {
    (major << 22) | (minor << 12)
}

/// Client environment version shaderc targets for a Vulkan version, in
/// Vulkan's packed version encoding.
pub(crate) const fn client_version(target: VulkanVersion) -> u32 {
    match target {
        VulkanVersion::V1_0 => vulkan_api_version(1, 0),
        VulkanVersion::V1_1 => vulkan_api_version(1, 1),
        VulkanVersion::V1_2 => vulkan_api_version(1, 2),
        VulkanVersion::V1_3 => vulkan_api_version(1, 3),
        VulkanVersion::V1_4 => vulkan_api_version(1, 4),
    }
}

/// SPIR-V version emitted for a Vulkan target.
///
/// Vulkan 1.3 and 1.4 both emit SPIR-V 1.6; the mapping is not invertible.
pub(crate) fn module_version(target: VulkanVersion) -> SpirvVersion {
    match target {
        VulkanVersion::V1_0 => SpirvVersion::V1_0,
        VulkanVersion::V1_1 => SpirvVersion::V1_3,
        VulkanVersion::V1_2 => SpirvVersion::V1_5,
        VulkanVersion::V1_3 | VulkanVersion::V1_4 => SpirvVersion::V1_6,
    }
}

fn get_shaderc_options(
    target: VulkanVersion,
) -> Result<CompileOptions<'static>, ShaderCompileError> {
    let mut options = CompileOptions::new().ok_or(ShaderCompileError::ShaderCInitError)?;
    options.set_include_callback(|_, _, _, _| {
        Err("sources must have includes resolved before compilation".into())
    });
    options.set_target_env(TargetEnv::Vulkan, client_version(target));
    options.set_target_spirv(module_version(target));
    options.set_limit(Limit::MaxLights, 32);
    options.set_limit(Limit::MaxClipPlanes, 6);
    options.set_limit(Limit::MaxTextureUnits, 32);
    options.set_limit(Limit::MaxTextureCoords, 32);
    options.set_limit(Limit::MaxVertexAttribs, 64);
    options.set_limit(Limit::MaxVertexUniformComponents, 4096);
    options.set_limit(Limit::MaxVaryingFloats, 64);
    options.set_limit(Limit::MaxVertexTextureImageUnits, 32);
    options.set_limit(Limit::MaxCombinedTextureImageUnits, 80);
    options.set_limit(Limit::MaxTextureImageUnits, 32);
    options.set_limit(Limit::MaxFragmentUniformComponents, 4096);
    options.set_limit(Limit::MaxDrawBuffers, 32);
    options.set_limit(Limit::MaxVertexUniformVectors, 128);
    options.set_limit(Limit::MaxVaryingVectors, 8);
    options.set_limit(Limit::MaxFragmentUniformVectors, 16);
    options.set_limit(Limit::MaxVertexOutputVectors, 16);
    options.set_limit(Limit::MaxFragmentInputVectors, 15);
    options.set_limit(Limit::MinProgramTexelOffset, -8);
    options.set_limit(Limit::MaxProgramTexelOffset, 7);
    options.set_limit(Limit::MaxClipDistances, 8);
    options.set_limit(Limit::MaxComputeWorkGroupCountX, 65535);
    options.set_limit(Limit::MaxComputeWorkGroupCountY, 65535);
    options.set_limit(Limit::MaxComputeWorkGroupCountZ, 65535);
    options.set_limit(Limit::MaxComputeWorkGroupSizeX, 1024);
    options.set_limit(Limit::MaxComputeWorkGroupSizeY, 1024);
    options.set_limit(Limit::MaxComputeWorkGroupSizeZ, 64);
    options.set_limit(Limit::MaxComputeUniformComponents, 1024);
    options.set_limit(Limit::MaxComputeTextureImageUnits, 16);
    options.set_limit(Limit::MaxComputeImageUniforms, 8);
    options.set_limit(Limit::MaxComputeAtomicCounters, 8);
    options.set_limit(Limit::MaxComputeAtomicCounterBuffers, 1);
    options.set_limit(Limit::MaxVaryingComponents, 60);
    options.set_limit(Limit::MaxVertexOutputComponents, 64);
    options.set_limit(Limit::MaxGeometryInputComponents, 64);
    options.set_limit(Limit::MaxGeometryOutputComponents, 128);
    options.set_limit(Limit::MaxFragmentInputComponents, 128);
    options.set_limit(Limit::MaxImageUnits, 8);
    options.set_limit(Limit::MaxCombinedImageUnitsAndFragmentOutputs, 8);
    options.set_limit(Limit::MaxCombinedShaderOutputResources, 8);
    options.set_limit(Limit::MaxImageSamples, 0);
    options.set_limit(Limit::MaxVertexImageUniforms, 0);
    options.set_limit(Limit::MaxTessControlImageUniforms, 0);
    options.set_limit(Limit::MaxTessEvaluationImageUniforms, 0);
    options.set_limit(Limit::MaxGeometryImageUniforms, 0);
    options.set_limit(Limit::MaxFragmentImageUniforms, 8);
    options.set_limit(Limit::MaxCombinedImageUniforms, 8);
    options.set_limit(Limit::MaxGeometryTextureImageUnits, 16);
    options.set_limit(Limit::MaxGeometryOutputVertices, 256);
    options.set_limit(Limit::MaxGeometryTotalOutputComponents, 1024);
    options.set_limit(Limit::MaxGeometryUniformComponents, 1024);
    options.set_limit(Limit::MaxGeometryVaryingComponents, 64);
    options.set_limit(Limit::MaxTessControlInputComponents, 128);
    options.set_limit(Limit::MaxTessControlOutputComponents, 128);
    options.set_limit(Limit::MaxTessControlTextureImageUnits, 16);
    options.set_limit(Limit::MaxTessControlUniformComponents, 1024);
    options.set_limit(Limit::MaxTessControlTotalOutputComponents, 4096);
    options.set_limit(Limit::MaxTessEvaluationInputComponents, 128);
    options.set_limit(Limit::MaxTessEvaluationOutputComponents, 128);
    options.set_limit(Limit::MaxTessEvaluationTextureImageUnits, 16);
    options.set_limit(Limit::MaxTessEvaluationUniformComponents, 1024);
    options.set_limit(Limit::MaxTessPatchComponents, 120);
    options.set_limit(Limit::MaxPatchVertices, 32);
    options.set_limit(Limit::MaxTessGenLevel, 64);
    options.set_limit(Limit::MaxViewports, 16);
    options.set_limit(Limit::MaxVertexAtomicCounters, 0);
    options.set_limit(Limit::MaxTessControlAtomicCounters, 0);
    options.set_limit(Limit::MaxTessEvaluationAtomicCounters, 0);
    options.set_limit(Limit::MaxGeometryAtomicCounters, 0);
    options.set_limit(Limit::MaxFragmentAtomicCounters, 8);
    options.set_limit(Limit::MaxCombinedAtomicCounters, 8);
    options.set_limit(Limit::MaxAtomicCounterBindings, 1);
    options.set_limit(Limit::MaxVertexAtomicCounterBuffers, 0);
    options.set_limit(Limit::MaxTessControlAtomicCounterBuffers, 0);
    options.set_limit(Limit::MaxTessEvaluationAtomicCounterBuffers, 0);
    options.set_limit(Limit::MaxGeometryAtomicCounterBuffers, 0);
    options.set_limit(Limit::MaxFragmentAtomicCounterBuffers, 1);
    options.set_limit(Limit::MaxCombinedAtomicCounterBuffers, 1);
    options.set_limit(Limit::MaxAtomicCounterBufferSize, 16384);
    options.set_limit(Limit::MaxTransformFeedbackBuffers, 4);
    options.set_limit(Limit::MaxTransformFeedbackInterleavedComponents, 64);
    options.set_limit(Limit::MaxCullDistances, 8);
    options.set_limit(Limit::MaxCombinedClipAndCullDistances, 8);
    options.set_limit(Limit::MaxSamples, 4);

    Ok(options)
}

fn compile_spirv(
    source: &str,
    stage: ShaderStage,
    target: VulkanVersion,
) -> Result<GlslangCompilation, ShaderCompileError> {
    // A malformed #version directive is reported here rather than as a
    // glslang diagnostic; 0 means the source declares no version at all.
    let source_version = source_version(source)?;

    let _serial = COMPILER_SERIAL
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    let compiler = shaderc::Compiler::new().ok_or(ShaderCompileError::ShaderCInitError)?;
    let options = get_shaderc_options(target)?;
    let artifact = compiler.compile_into_spirv(
        source,
        shader_kind(stage),
        "shader.glsl",
        "main",
        Some(&options),
    )?;
    Ok(GlslangCompilation {
        artifact,
        source_version,
    })
}
