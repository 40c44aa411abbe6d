use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreprocessError {
    #[error("the file could not be read")]
    IOError(PathBuf, std::io::Error),
    #[error("the #version directive does not carry a numeric version: {0}")]
    MalformedVersionDirective(String),
}
