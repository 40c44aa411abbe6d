use crate::error::ShaderDecompileError;
use shaderpipe_common::GlslVersion;
use spirv_cross::glsl;
use spirv_cross::spirv::{Ast, Module};

/// GLSL dialect spirv-cross emits for an output profile.
///
/// Profile 310 is the ES dialect; desktop GLSL defines no 310.
pub(crate) fn output_dialect(version: GlslVersion) -> glsl::Version {
    match version {
        GlslVersion::V3_10 => glsl::Version::V3_10Es,
        GlslVersion::V3_30 => glsl::Version::V3_30,
        GlslVersion::V4_50 => glsl::Version::V4_50,
    }
}

/// Whether the emitted source must request the legacy 420pack layout
/// extension. Every profile below 450 does.
pub(crate) fn needs_legacy_pack_extension(version: GlslVersion) -> bool {
    version != GlslVersion::V4_50
}

/// SPIR-V to GLSL recompiler backed by spirv-cross.
pub struct CrossGlsl {
    ast: Ast<glsl::Target>,
}

impl CrossGlsl {
    /// Parse a compiled module for recompilation.
    pub fn parse(spirv: &[u32]) -> Result<Self, ShaderDecompileError> {
        let module = Module::from_words(spirv);
        let ast = Ast::parse(&module)?;
        Ok(CrossGlsl { ast })
    }

    /// Recompile the module to GLSL source for the given output profile.
    pub fn compile(mut self, version: GlslVersion) -> Result<String, ShaderDecompileError> {
        let mut options = glsl::CompilerOptions::default();
        options.version = output_dialect(version);
        options.vulkan_semantics = false;
        options.separate_shader_objects = false;
        options.enable_420_pack_extension = needs_legacy_pack_extension(version);

        self.ast.set_compiler_options(&options)?;
        Ok(self.ast.compile()?)
    }
}

/// Recompile a SPIR-V module to GLSL source targeting an output profile.
pub fn spirv_to_glsl(spirv: &[u32], version: GlslVersion) -> Result<String, ShaderDecompileError> {
    CrossGlsl::parse(spirv)?.compile(version)
}
