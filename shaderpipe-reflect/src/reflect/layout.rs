use shaderpipe_common::ShaderStageMask;

/// The kind of bindable resource a descriptor slot holds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DescriptorKind {
    UniformBuffer,
    StorageBuffer,
    CombinedImageSampler,
    SampledImage,
    Sampler,
    StorageImage,
    InputAttachment,
    AccelerationStructure,
}

/// A bindable resource slot declared by a module.
///
/// `(set, binding)` pairs are unique within one [`ShaderReflection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorBinding {
    pub set: u32,
    pub binding: u32,
    pub name: String,
    pub kind: DescriptorKind,
    /// Array multiplicity of the slot, always at least 1.
    pub count: u32,
    pub stage_mask: ShaderStageMask,
}

/// A push constant block declared by a module.
///
/// `offset` is always `0`: ranges cover whole blocks, sub-range activity
/// is not analyzed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushConstantRange {
    pub offset: u32,
    pub size: u32,
    pub stage_mask: ShaderStageMask,
}

/// A stage input or output variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageAttribute {
    pub location: u32,
    pub name: String,
    pub component_count: u32,
    pub bit_width: u32,
}

/// The external interface of a compiled module.
///
/// Collections keep the module's enumeration order; the order is stable
/// for a given module and toolchain but carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderReflection {
    pub descriptor_bindings: Vec<DescriptorBinding>,
    pub push_constants: Vec<PushConstantRange>,
    pub inputs: Vec<StageAttribute>,
    pub outputs: Vec<StageAttribute>,
}
