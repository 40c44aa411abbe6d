pub mod glsl;

pub use glsl::{spirv_to_glsl, CrossGlsl};
