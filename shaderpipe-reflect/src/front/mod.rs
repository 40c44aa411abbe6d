use crate::error::ShaderCompileError;
use shaderpipe_common::{ShaderStage, VulkanVersion};

pub mod shaderc;

pub use self::shaderc::GlslangCompilation;

/// A front end that can compile shading-language source into a module.
pub trait ShaderCompilation: Sized {
    /// Compile the input shader source into a compilation unit.
    fn compile(
        source: &str,
        stage: ShaderStage,
        target: VulkanVersion,
    ) -> Result<Self, ShaderCompileError>;
}
