use crate::ui::state::ViewerState;
use crate::ui::widgets::ScatterPlot;

pub struct MainPanel;

impl MainPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut ViewerState) {
        if state.figures.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label("No generations to display.");
            });
            return;
        }

        // Single figure, sized to the panel
        if let Some(figure) = state.selected_figure() {
            let available = ui.available_size();
            let size = (available.x.min(available.y) - 40.0).max(state.config.figure_size);
            let id = format!("focus:{}", figure.title);
            ScatterPlot::show(ui, &id, figure, &state.config, size);
            return;
        }

        let columns = state.columns.max(1);
        egui::ScrollArea::both().show(ui, |ui| {
            egui::Grid::new("figure_grid")
                .spacing([16.0, 16.0])
                .show(ui, |ui| {
                    for (idx, figure) in state.figures.iter().enumerate() {
                        ScatterPlot::show(ui, &figure.title, figure, &state.config, state.config.figure_size);
                        if (idx + 1) % columns == 0 {
                            ui.end_row();
                        }
                    }
                });
        });
    }
}
