use bitflags::bitflags;

/// A programmable pipeline stage a shader can be compiled for.
///
/// Chosen by the caller before compilation; a compiled module carries its
/// stage in its execution model, see `shaderpipe-reflect`.
#[repr(u32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    TessControl,
    TessEval,
    Geometry,
    Fragment,
    Compute,
    RayGeneration,
    Intersection,
    AnyHit,
    ClosestHit,
    Miss,
    Callable,
    Task,
    Mesh,
}

bitflags! {
    /// Stage visibility of a reflected resource.
    ///
    /// Bit values are identical to Vulkan's `VkShaderStageFlagBits`, so a
    /// mask can be handed to a descriptor-set-layout or push-constant-range
    /// builder unchanged.
    pub struct ShaderStageMask: u32 {
        const VERTEX = 0x0000_0001;
        const TESS_CONTROL = 0x0000_0002;
        const TESS_EVAL = 0x0000_0004;
        const GEOMETRY = 0x0000_0008;
        const FRAGMENT = 0x0000_0010;
        const COMPUTE = 0x0000_0020;
        const TASK = 0x0000_0040;
        const MESH = 0x0000_0080;
        const RAY_GENERATION = 0x0000_0100;
        const ANY_HIT = 0x0000_0200;
        const CLOSEST_HIT = 0x0000_0400;
        const MISS = 0x0000_0800;
        const INTERSECTION = 0x0000_1000;
        const CALLABLE = 0x0000_2000;
    }
}

impl ShaderStage {
    /// The visibility bit for this stage.
    pub const fn mask(self) -> ShaderStageMask {
        match self {
            ShaderStage::Vertex => ShaderStageMask::VERTEX,
            ShaderStage::TessControl => ShaderStageMask::TESS_CONTROL,
            ShaderStage::TessEval => ShaderStageMask::TESS_EVAL,
            ShaderStage::Geometry => ShaderStageMask::GEOMETRY,
            ShaderStage::Fragment => ShaderStageMask::FRAGMENT,
            ShaderStage::Compute => ShaderStageMask::COMPUTE,
            ShaderStage::RayGeneration => ShaderStageMask::RAY_GENERATION,
            ShaderStage::Intersection => ShaderStageMask::INTERSECTION,
            ShaderStage::AnyHit => ShaderStageMask::ANY_HIT,
            ShaderStage::ClosestHit => ShaderStageMask::CLOSEST_HIT,
            ShaderStage::Miss => ShaderStageMask::MISS,
            ShaderStage::Callable => ShaderStageMask::CALLABLE,
            ShaderStage::Task => ShaderStageMask::TASK,
            ShaderStage::Mesh => ShaderStageMask::MESH,
        }
    }
}

/// Vulkan runtime version a module is compiled against.
///
/// Governs the compiler's client environment and the emitted SPIR-V
/// version. Independent of [`GlslVersion`], which only affects
/// recompilation back to source.
#[repr(u32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VulkanVersion {
    V1_0,
    V1_1,
    V1_2,
    V1_3,
    V1_4,
}

/// GLSL profile emitted when recompiling a module back to source.
#[repr(u32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GlslVersion {
    /// Mobile / web targets.
    V3_10,
    /// Compatibility desktop targets.
    V3_30,
    /// Modern desktop targets.
    V4_50,
}

impl GlslVersion {
    /// The numeric profile written into the emitted `#version` directive.
    pub const fn numeric(self) -> u32 {
        match self {
            GlslVersion::V3_10 => 310,
            GlslVersion::V3_30 => 330,
            GlslVersion::V4_50 => 450,
        }
    }
}
