use crate::config::ViewerConfig;
use crate::error::{ArchiveplotError, Result};
use crate::render::{FigureBatch, FigureSink};
use crate::ui::app::ArchiveViewerApp;
use crate::ui::state::ViewerState;

/// Queues figures and opens one window showing all of them on `show`.
pub struct ViewerSink {
    batch: FigureBatch,
    config: ViewerConfig,
    scale_summary: String,
}

impl ViewerSink {
    pub fn new(config: ViewerConfig, scale_summary: impl Into<String>) -> Self {
        Self {
            batch: FigureBatch::new(),
            config,
            scale_summary: scale_summary.into(),
        }
    }
}

impl FigureSink for ViewerSink {
    fn render_scatter(&mut self, xs: &[f64], ys: &[f64], colors: &[f64], title: &str) -> Result<()> {
        self.batch.render_scatter(xs, ys, colors, title)
    }

    fn show(&mut self) -> Result<()> {
        let figures = std::mem::take(&mut self.batch).into_figures();
        log::info!("Opening viewer with {} figures", figures.len());

        let state = ViewerState::new(figures, self.config.clone(), self.scale_summary.clone());

        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([self.config.window_width, self.config.window_height])
                .with_min_inner_size([480.0, 360.0])
                .with_title("archiveplot"),
            ..Default::default()
        };

        eframe::run_native(
            "archiveplot",
            native_options,
            Box::new(move |cc| Ok(Box::new(ArchiveViewerApp::new(cc, state)))),
        )
        .map_err(|e| ArchiveplotError::Viewer(e.to_string()))
    }
}
