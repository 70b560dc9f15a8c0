use crate::config::ViewerConfig;
use crate::render::ScatterFigure;

/// Central application state for the viewer
pub struct ViewerState {
    pub figures: Vec<ScatterFigure>,
    pub config: ViewerConfig,

    // Selection
    pub selected_figure_idx: Option<usize>,

    // Display
    pub columns: usize,
    pub scale_summary: String,
}

impl ViewerState {
    pub fn new(figures: Vec<ScatterFigure>, config: ViewerConfig, scale_summary: String) -> Self {
        let columns = config.columns;
        Self {
            figures,
            config,
            selected_figure_idx: None,
            columns,
            scale_summary,
        }
    }

    pub fn selected_figure(&self) -> Option<&ScatterFigure> {
        self.selected_figure_idx.and_then(|idx| self.figures.get(idx))
    }

    pub fn total_points(&self) -> usize {
        self.figures.iter().map(|f| f.len()).sum()
    }
}
