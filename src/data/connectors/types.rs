use crate::config::ArchiveConfig;
use std::path::PathBuf;

/// Column positions of the plotted fields within a record line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub x: usize,
    pub y: usize,
    pub color: usize,
    pub min_fields: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::from(&ArchiveConfig::default())
    }
}

impl From<&ArchiveConfig> for ColumnLayout {
    fn from(cfg: &ArchiveConfig) -> Self {
        Self {
            x: cfg.x_column,
            y: cfg.y_column,
            color: cfg.color_column,
            min_fields: cfg.min_fields(),
        }
    }
}

/// One parsed archive line. `color` keeps its sign here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchiveRecord {
    pub x: f64,
    pub y: f64,
    pub color: f64,
}

/// Summary of one loaded archive file
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveMetadata {
    pub file_path: PathBuf,
    pub generation: u64,
    pub num_records: usize,
    pub skipped_blank_lines: usize,
    pub color_max: Option<f64>, // absolute value, before scaling
}
