use super::traits::ConfigSection;
use crate::error::ArchiveplotError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Marker area in points squared
    pub marker_size: f32,
    pub axis_min: f64,
    pub axis_max: f64,
    /// Figures per row in the viewer grid
    pub columns: usize,
    /// Edge length of one square figure, in points
    pub figure_size: f32,
    /// Number of distinct gray shades used when drawing markers
    pub gray_levels: usize,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            marker_size: 20.0,
            axis_min: 0.0,
            axis_max: 1.0,
            columns: 3,
            figure_size: 360.0,
            gray_levels: 64,
            window_width: 1200.0,
            window_height: 800.0,
        }
    }
}

impl ViewerConfig {
    /// Marker radius derived from its area.
    pub fn marker_radius(&self) -> f32 {
        (self.marker_size / std::f32::consts::PI).sqrt()
    }
}

impl ConfigSection for ViewerConfig {
    fn section_name() -> &'static str {
        "viewer"
    }

    fn validate(&self) -> Result<(), ArchiveplotError> {
        if self.marker_size <= 0.0 {
            return Err(ArchiveplotError::Configuration(
                "Marker size must be positive".to_string(),
            ));
        }
        if self.axis_min >= self.axis_max {
            return Err(ArchiveplotError::Configuration(format!(
                "Axis range is empty: [{}, {}]",
                self.axis_min, self.axis_max
            )));
        }
        if self.columns == 0 {
            return Err(ArchiveplotError::Configuration(
                "Viewer needs at least one column".to_string(),
            ));
        }
        if !(2..=256).contains(&self.gray_levels) {
            return Err(ArchiveplotError::Configuration(
                "Gray levels must be between 2 and 256".to_string(),
            ));
        }
        Ok(())
    }
}
