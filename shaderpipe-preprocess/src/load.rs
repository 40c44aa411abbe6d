use crate::PreprocessError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read a shader source file fully into memory.
pub fn load_shader_source(path: impl AsRef<Path>) -> Result<String, PreprocessError> {
    let path = path.as_ref();
    let mut source = String::new();
    File::open(path)
        .and_then(|mut f| f.read_to_string(&mut source))
        .map_err(|e| PreprocessError::IOError(path.to_path_buf(), e))?;
    Ok(source)
}
