use crate::ui::state::ViewerState;
use crate::ui::widgets::FigureList;

pub struct LeftPanel;

impl LeftPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut ViewerState) {
        ui.heading("Generations");

        ui.separator();

        ui.label(format!("{} figures, {} points", state.figures.len(), state.total_points()));
        ui.label(&state.scale_summary);

        ui.horizontal(|ui| {
            ui.label("Columns:");
            ui.add(egui::DragValue::new(&mut state.columns).range(1..=8));
        });

        ui.separator();

        FigureList::show(ui, state);
    }
}
