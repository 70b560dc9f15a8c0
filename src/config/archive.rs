use super::traits::ConfigSection;
use crate::error::ArchiveplotError;
use serde::{Deserialize, Serialize};

/// Where archive files live and which columns carry the plotted values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    /// File name prefix before the generation number
    pub file_prefix: String,
    /// File extension, without the leading dot
    pub file_extension: String,
    pub x_column: usize,
    pub y_column: usize,
    /// Signed scalar column, plotted as absolute value
    pub color_column: usize,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            file_prefix: "archive_".to_string(),
            file_extension: "dat".to_string(),
            x_column: 1,
            y_column: 2,
            color_column: 3,
        }
    }
}

impl ArchiveConfig {
    /// Archive file name for one generation, e.g. `archive_40.dat`.
    pub fn file_name(&self, generation: u64) -> String {
        format!("{}{}.{}", self.file_prefix, generation, self.file_extension)
    }

    /// Minimum number of whitespace-separated fields a record must carry.
    pub fn min_fields(&self) -> usize {
        self.x_column.max(self.y_column).max(self.color_column).max(3) + 1
    }
}

impl ConfigSection for ArchiveConfig {
    fn section_name() -> &'static str {
        "archive"
    }

    fn validate(&self) -> Result<(), ArchiveplotError> {
        if self.file_prefix.contains('/') || self.file_prefix.contains('\\') {
            return Err(ArchiveplotError::Configuration(
                "Archive file prefix must not contain path separators".to_string(),
            ));
        }
        if self.file_extension.is_empty() || self.file_extension.starts_with('.') {
            return Err(ArchiveplotError::Configuration(
                "Archive file extension must be non-empty and given without a leading dot"
                    .to_string(),
            ));
        }
        Ok(())
    }
}
