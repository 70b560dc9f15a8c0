use crate::config::ViewerConfig;
use crate::render::{gray_level, ScatterFigure};
use egui::Color32;
use egui_plot::{MarkerShape, Plot, PlotBounds, Points};
use std::collections::BTreeMap;

pub struct ScatterPlot;

impl ScatterPlot {
    /// Draw one figure with fixed axis bounds and grayscale markers.
    pub fn show(ui: &mut egui::Ui, id: &str, figure: &ScatterFigure, config: &ViewerConfig, size: f32) {
        let radius = config.marker_radius();
        let bounds = PlotBounds::from_min_max(
            [config.axis_min, config.axis_min],
            [config.axis_max, config.axis_max],
        );
        let shades = Self::bucket_by_shade(figure, config.gray_levels);

        ui.vertical(|ui| {
            ui.label(egui::RichText::new(&figure.title).strong());

            Plot::new(id)
                .width(size)
                .height(size)
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .allow_boxed_zoom(false)
                .show(ui, |plot_ui| {
                    plot_ui.set_plot_bounds(bounds);
                    for (shade, points) in shades {
                        plot_ui.points(
                            Points::new("", points)
                                .shape(MarkerShape::Circle)
                                .filled(true)
                                .radius(radius)
                                .color(Color32::from_gray(shade)),
                        );
                    }
                });
        });
    }

    /// Group points by gray shade so each shade is drawn as one series.
    pub fn bucket_by_shade(figure: &ScatterFigure, levels: usize) -> BTreeMap<u8, Vec<[f64; 2]>> {
        let mut shades: BTreeMap<u8, Vec<[f64; 2]>> = BTreeMap::new();
        for (x, y, c) in figure.points() {
            shades.entry(gray_level(c, levels)).or_default().push([x, y]);
        }
        shades
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_by_shade() {
        let figure = ScatterFigure {
            title: "Generation 0 Output".to_string(),
            xs: vec![0.1, 0.2, 0.3],
            ys: vec![0.4, 0.5, 0.6],
            colors: vec![0.0, 1.0, 0.0],
        };

        let shades = ScatterPlot::bucket_by_shade(&figure, 64);
        assert_eq!(shades.len(), 2);
        assert_eq!(shades[&0], vec![[0.1, 0.4], [0.3, 0.6]]);
        assert_eq!(shades[&255], vec![[0.2, 0.5]]);
    }
}
