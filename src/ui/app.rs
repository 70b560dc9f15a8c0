use super::panels::{LeftPanel, MainPanel};
use super::state::ViewerState;

pub struct ArchiveViewerApp {
    state: ViewerState,
    left_panel: LeftPanel,
    main_panel: MainPanel,
}

impl ArchiveViewerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: ViewerState) -> Self {
        // Grayscale markers read best on a light plot background
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self {
            state,
            left_panel: LeftPanel::new(),
            main_panel: MainPanel::new(),
        }
    }
}

impl eframe::App for ArchiveViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Archive Scatter Viewer");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Close").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        egui::SidePanel::left("left_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                self.left_panel.show(ui, &mut self.state);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.main_panel.show(ui, &mut self.state);
        });
    }
}
