/// Shader recompilation backends.
pub mod back;
/// Error types.
pub mod error;
/// Shader frontend compilers.
pub mod front;
/// Shader reflection.
pub mod reflect;
