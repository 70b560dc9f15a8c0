use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveplotError {
    #[error("Archive file not found: {}", path.display())]
    ResourceNotFound { path: PathBuf },

    #[error("Malformed archive {} at line {line}: {reason}", path.display())]
    DataFormat {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("Degenerate color scale: {0}")]
    DegenerateScale(String),

    #[error("Column length mismatch in {context}: x={x}, y={y}, color={color}")]
    ColumnMismatch {
        context: String,
        x: usize,
        y: usize,
        color: usize,
    },

    #[error("Generation {0} has already been normalized")]
    AlreadyNormalized(u64),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Viewer error: {0}")]
    Viewer(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, ArchiveplotError>;
