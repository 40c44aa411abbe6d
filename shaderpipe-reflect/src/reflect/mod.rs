/// Reflection data model.
pub mod layout;

/// Reflection via spirq.
pub mod spirq;

pub use layout::ShaderReflection;
pub use spirq::reflect_spirv;
