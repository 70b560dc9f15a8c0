use crate::ui::state::ViewerState;

pub struct FigureList;

impl FigureList {
    pub fn show(ui: &mut egui::Ui, state: &mut ViewerState) {
        if ui
            .selectable_label(state.selected_figure_idx.is_none(), "All generations")
            .clicked()
        {
            state.selected_figure_idx = None;
        }

        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            for (idx, figure) in state.figures.iter().enumerate() {
                let label = format!("{} ({} pts)", figure.title, figure.len());
                if ui
                    .selectable_label(state.selected_figure_idx == Some(idx), label)
                    .clicked()
                {
                    state.selected_figure_idx = Some(idx);
                }
            }
        });
    }
}
