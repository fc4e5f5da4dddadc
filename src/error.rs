use std::path::PathBuf;

use color_vision::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("PNG decode error: {0}")]
    Decode(String),

    #[error("PNG encode error: {0}")]
    Encode(String),

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Color engine error: {0}")]
    Engine(#[from] EngineError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}
