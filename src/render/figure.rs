/// One queued scatter plot: points plus a grayscale intensity per point.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterFigure {
    pub title: String,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub colors: Vec<f64>,
}

impl ScatterFigure {
    pub fn title_for(generation: u64) -> String {
        format!("Generation {} Output", generation)
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Iterate `(x, y, intensity)` triples
    pub fn points(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.xs
            .iter()
            .zip(self.ys.iter())
            .zip(self.colors.iter())
            .map(|((x, y), c)| (*x, *y, *c))
    }

    /// Intensity range actually present, for summaries.
    pub fn color_range(&self) -> Option<(f64, f64)> {
        self.colors.iter().fold(None, |acc, &c| match acc {
            None => Some((c, c)),
            Some((lo, hi)) => Some((lo.min(c), hi.max(c))),
        })
    }
}

/// Quantize an intensity in [0, 1] to one of `levels` gray shades, 0 = black.
pub fn gray_level(intensity: f64, levels: usize) -> u8 {
    let levels = levels.clamp(2, 256);
    let step = (intensity.clamp(0.0, 1.0) * (levels - 1) as f64).round();
    ((step / (levels - 1) as f64) * 255.0).round() as u8
}
