use shaderpipe_preprocess::PreprocessError;
use thiserror::Error;

/// Error type for shader compilation.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ShaderCompileError {
    /// Compilation error from shaderc (glslang).
    #[error("shaderc")]
    ShaderCCompileError(#[from] shaderc::Error),

    /// Error when initializing the shaderc compiler.
    #[error("shaderc init")]
    ShaderCInitError,

    /// The source carried a `#version` directive that could not be parsed.
    #[error("preprocess")]
    PreprocessError(#[from] PreprocessError),
}

/// Error type for shader reflection.
///
/// Reflection only fails when the module itself cannot be parsed; a module
/// that parses always yields a reflection.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ShaderReflectError {
    /// The module could not be parsed.
    #[error("spirv parse: {0}")]
    SpirvParseError(String),
}

/// Error type for recompiling a module back to shading-language source.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ShaderDecompileError {
    /// Error when transpiling from spirv-cross.
    #[error("cross")]
    SpirvCrossDecompileError(#[from] spirv_cross::ErrorCode),
}
