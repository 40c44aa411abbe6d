use crate::error::ShaderReflectError;
use crate::reflect::layout::{
    DescriptorBinding, DescriptorKind, PushConstantRange, ShaderReflection, StageAttribute,
};
use rustc_hash::FxHashSet;
use shaderpipe_common::{ShaderStage, ShaderStageMask};
use spirq::spirv::ExecutionModel;
use spirq::ty::{DescriptorType, ScalarType, Type};
use spirq::var::Variable;
use spirq::ReflectConfig;

/// Stage a module's declared execution model classifies to.
///
/// `None` for models outside this vocabulary (e.g. OpenCL kernels); during
/// reflection that degrades to an empty stage mask, never an error.
pub fn stage_for_execution_model(model: ExecutionModel) -> Option<ShaderStage> {
    match model {
        ExecutionModel::Vertex => Some(ShaderStage::Vertex),
        ExecutionModel::TessellationControl => Some(ShaderStage::TessControl),
        ExecutionModel::TessellationEvaluation => Some(ShaderStage::TessEval),
        ExecutionModel::Geometry => Some(ShaderStage::Geometry),
        ExecutionModel::Fragment => Some(ShaderStage::Fragment),
        ExecutionModel::GLCompute => Some(ShaderStage::Compute),
        ExecutionModel::RayGenerationNV => Some(ShaderStage::RayGeneration),
        ExecutionModel::IntersectionNV => Some(ShaderStage::Intersection),
        ExecutionModel::AnyHitNV => Some(ShaderStage::AnyHit),
        ExecutionModel::ClosestHitNV => Some(ShaderStage::ClosestHit),
        ExecutionModel::MissNV => Some(ShaderStage::Miss),
        ExecutionModel::CallableNV => Some(ShaderStage::Callable),
        ExecutionModel::TaskNV | ExecutionModel::TaskEXT => Some(ShaderStage::Task),
        ExecutionModel::MeshNV | ExecutionModel::MeshEXT => Some(ShaderStage::Mesh),
        _ => None,
    }
}

/// Execution model modules of this stage declare.
///
/// Inverse of [`stage_for_execution_model`] over the concrete stages; the
/// ray-tracing models carry their NV names, which SPIR-V aliases to the
/// KHR ones.
pub fn execution_model(stage: ShaderStage) -> ExecutionModel {
    match stage {
        ShaderStage::Vertex => ExecutionModel::Vertex,
        ShaderStage::TessControl => ExecutionModel::TessellationControl,
        ShaderStage::TessEval => ExecutionModel::TessellationEvaluation,
        ShaderStage::Geometry => ExecutionModel::Geometry,
        ShaderStage::Fragment => ExecutionModel::Fragment,
        ShaderStage::Compute => ExecutionModel::GLCompute,
        ShaderStage::RayGeneration => ExecutionModel::RayGenerationNV,
        ShaderStage::Intersection => ExecutionModel::IntersectionNV,
        ShaderStage::AnyHit => ExecutionModel::AnyHitNV,
        ShaderStage::ClosestHit => ExecutionModel::ClosestHitNV,
        ShaderStage::Miss => ExecutionModel::MissNV,
        ShaderStage::Callable => ExecutionModel::CallableNV,
        ShaderStage::Task => ExecutionModel::TaskEXT,
        ShaderStage::Mesh => ExecutionModel::MeshEXT,
    }
}

/// Reflect a compiled module's external interface.
///
/// Fails only when the module cannot be parsed. Every resource category is
/// reflected independently and best-effort: a category nothing declares
/// comes back as an empty collection, a resource kind outside the
/// vocabulary is skipped, and an array dimension the module does not
/// record a literal size for counts as `1`.
pub fn reflect_spirv(words: &[u32]) -> Result<ShaderReflection, ShaderReflectError> {
    let entry_points = ReflectConfig::new()
        .spv(words)
        .ref_all_rscs(true)
        .reflect()
        .map_err(|err| ShaderReflectError::SpirvParseError(format!("{err:?}")))?;

    let mut reflection = ShaderReflection::default();
    let Some(entry_point) = entry_points.first() else {
        return Ok(reflection);
    };

    let stage_mask = stage_for_execution_model(entry_point.exec_model)
        .map(ShaderStage::mask)
        .unwrap_or_else(ShaderStageMask::empty);

    let mut occupied_slots = FxHashSet::default();
    for var in entry_point.vars.iter() {
        match var {
            Variable::Descriptor {
                name,
                desc_bind,
                desc_ty,
                ty,
                nbind,
            } => {
                let Some(kind) = descriptor_kind(desc_ty) else {
                    continue;
                };
                let set = desc_bind.set();
                let binding = desc_bind.bind();
                if !occupied_slots.insert((set, binding)) {
                    continue;
                }
                reflection.descriptor_bindings.push(DescriptorBinding {
                    set,
                    binding,
                    name: binding_name(name, set, binding),
                    kind,
                    count: descriptor_count(ty, *nbind),
                    stage_mask,
                });
            }
            Variable::PushConstant { ty, .. } => {
                reflection.push_constants.push(PushConstantRange {
                    offset: 0,
                    size: ty.nbyte().unwrap_or(0) as u32,
                    stage_mask,
                });
            }
            Variable::Input { name, location, ty } => {
                reflection
                    .inputs
                    .push(stage_attribute(name, location.loc(), ty));
            }
            Variable::Output { name, location, ty } => {
                reflection
                    .outputs
                    .push(stage_attribute(name, location.loc(), ty));
            }
            _ => {}
        }
    }

    Ok(reflection)
}

fn descriptor_kind(desc_ty: &DescriptorType) -> Option<DescriptorKind> {
    match desc_ty {
        DescriptorType::UniformBuffer() => Some(DescriptorKind::UniformBuffer),
        DescriptorType::StorageBuffer(_) => Some(DescriptorKind::StorageBuffer),
        DescriptorType::CombinedImageSampler() => Some(DescriptorKind::CombinedImageSampler),
        DescriptorType::SampledImage() => Some(DescriptorKind::SampledImage),
        DescriptorType::Sampler() => Some(DescriptorKind::Sampler),
        DescriptorType::StorageImage(_) => Some(DescriptorKind::StorageImage),
        DescriptorType::InputAttachment(_) => Some(DescriptorKind::InputAttachment),
        DescriptorType::AccelStruct() => Some(DescriptorKind::AccelerationStructure),
        // Texel buffers and anything newer are not part of the interface
        // this layer describes.
        _ => None,
    }
}

/// Descriptor count of a resource: the product of its array dimensions.
///
/// Dimensions without a literal size in the module (specialization
/// constants, runtime-sized arrays) count as `1`, and a zero dimension is
/// clamped to `1`, so the multiplicity is always workable for pool sizing
/// even when it cannot be exact.
fn descriptor_count(ty: &Type, nbind: u32) -> u32 {
    let mut ty = ty;
    let mut total: u32 = 1;
    let mut arrayed = false;
    while let Type::Array(array_ty) = ty {
        arrayed = true;
        let dim = match array_ty.nelement {
            Some(0) | None => 1,
            Some(n) => n,
        };
        total = total.saturating_mul(dim);
        ty = &array_ty.element_ty;
    }
    if !arrayed && nbind > 1 {
        // The reader already folded the multiplicity into the bind count.
        return nbind;
    }
    total.max(1)
}

// Stripped debug names synthesize a fallback that is deterministic for
// the same module, so reflecting twice yields identical results.
fn binding_name(name: &Option<String>, set: u32, binding: u32) -> String {
    match name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("_set{set}_binding{binding}"),
    }
}

fn attribute_name(name: &Option<String>, location: u32) -> String {
    match name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("_location{location}"),
    }
}

fn stage_attribute(name: &Option<String>, location: u32, ty: &Type) -> StageAttribute {
    StageAttribute {
        location,
        name: attribute_name(name, location),
        component_count: component_count(ty),
        bit_width: scalar_bit_width(ty),
    }
}

fn component_count(ty: &Type) -> u32 {
    match ty {
        Type::Scalar(_) => 1,
        Type::Vector(vector_ty) => vector_ty.nscalar,
        Type::Matrix(matrix_ty) => matrix_ty.vector_ty.nscalar,
        Type::Array(array_ty) => component_count(&array_ty.element_ty),
        _ => 1,
    }
}

fn scalar_bit_width(ty: &Type) -> u32 {
    match ty {
        Type::Scalar(scalar_ty) => scalar_bits(scalar_ty),
        Type::Vector(vector_ty) => scalar_bits(&vector_ty.scalar_ty),
        Type::Matrix(matrix_ty) => scalar_bits(&matrix_ty.vector_ty.scalar_ty),
        Type::Array(array_ty) => scalar_bit_width(&array_ty.element_ty),
        _ => 32,
    }
}

fn scalar_bits(scalar_ty: &ScalarType) -> u32 {
    match scalar_ty {
        ScalarType::Integer { bits, .. } => *bits as u32,
        ScalarType::Float { bits } => *bits as u32,
        _ => 32,
    }
}

#[cfg(test)]
mod test {
    use crate::reflect::spirq::{
        descriptor_count, execution_model, stage_for_execution_model,
    };
    use spirq::spirv::ExecutionModel;
    use spirq::ty::{ArrayType, ScalarType, Type};
    use shaderpipe_common::ShaderStage;

    fn float_scalar() -> Type {
        Type::Scalar(ScalarType::Float { bits: 32 })
    }

    fn array_of(element_ty: Type, nelement: Option<u32>) -> Type {
        Type::Array(ArrayType {
            element_ty: Box::new(element_ty),
            nelement,
            stride: None,
        })
    }

    #[test]
    fn execution_models_round_trip_every_stage() {
        let stages = [
            ShaderStage::Vertex,
            ShaderStage::TessControl,
            ShaderStage::TessEval,
            ShaderStage::Geometry,
            ShaderStage::Fragment,
            ShaderStage::Compute,
            ShaderStage::RayGeneration,
            ShaderStage::Intersection,
            ShaderStage::AnyHit,
            ShaderStage::ClosestHit,
            ShaderStage::Miss,
            ShaderStage::Callable,
            ShaderStage::Task,
            ShaderStage::Mesh,
        ];
        for stage in stages {
            assert_eq!(stage_for_execution_model(execution_model(stage)), Some(stage));
        }
    }

    #[test]
    fn kernels_classify_to_no_stage() {
        assert_eq!(stage_for_execution_model(ExecutionModel::Kernel), None);
    }

    #[test]
    fn unarrayed_resources_count_one() {
        assert_eq!(descriptor_count(&float_scalar(), 1), 1);
    }

    #[test]
    fn literal_dimensions_multiply() {
        assert_eq!(descriptor_count(&array_of(float_scalar(), Some(4)), 4), 4);
        let nested = array_of(array_of(float_scalar(), Some(2)), Some(4));
        assert_eq!(descriptor_count(&nested, 8), 8);
    }

    #[test]
    fn unresolved_dimensions_count_one() {
        assert_eq!(descriptor_count(&array_of(float_scalar(), None), 0), 1);
        let mixed = array_of(array_of(float_scalar(), None), Some(4));
        assert_eq!(descriptor_count(&mixed, 0), 4);
    }

    #[test]
    fn zero_dimensions_clamp_to_one() {
        assert_eq!(descriptor_count(&array_of(float_scalar(), Some(0)), 0), 1);
    }

    #[test]
    fn stripped_names_synthesize_deterministic_fallbacks() {
        use crate::reflect::spirq::{attribute_name, binding_name};

        assert_eq!(binding_name(&None, 1, 3), "_set1_binding3");
        assert_eq!(binding_name(&Some(String::new()), 1, 3), "_set1_binding3");
        assert_eq!(binding_name(&Some("u_scene".into()), 1, 3), "u_scene");
        assert_eq!(attribute_name(&None, 2), "_location2");
    }
}
