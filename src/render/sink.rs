use super::figure::ScatterFigure;
use crate::error::{ArchiveplotError, Result};

/// Plotting collaborator. Figures are queued by `render_scatter` and only
/// displayed by the single `show` call at the end of the run.
pub trait FigureSink {
    fn render_scatter(&mut self, xs: &[f64], ys: &[f64], colors: &[f64], title: &str) -> Result<()>;
    fn show(&mut self) -> Result<()>;
}

/// Ordered queue of figures waiting to be displayed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FigureBatch {
    figures: Vec<ScatterFigure>,
}

impl FigureBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, figure: ScatterFigure) {
        self.figures.push(figure);
    }

    pub fn figures(&self) -> &[ScatterFigure] {
        &self.figures
    }

    pub fn len(&self) -> usize {
        self.figures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    pub fn into_figures(self) -> Vec<ScatterFigure> {
        self.figures
    }

    pub(crate) fn queue(&mut self, xs: &[f64], ys: &[f64], colors: &[f64], title: &str) -> Result<()> {
        if xs.len() != ys.len() || ys.len() != colors.len() {
            return Err(ArchiveplotError::ColumnMismatch {
                context: format!("figure '{}'", title),
                x: xs.len(),
                y: ys.len(),
                color: colors.len(),
            });
        }
        self.push(ScatterFigure {
            title: title.to_string(),
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            colors: colors.to_vec(),
        });
        Ok(())
    }
}

impl FigureSink for FigureBatch {
    fn render_scatter(&mut self, xs: &[f64], ys: &[f64], colors: &[f64], title: &str) -> Result<()> {
        self.queue(xs, ys, colors, title)
    }

    fn show(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Headless sink: logs one summary line per figure instead of opening a window.
#[derive(Debug, Default)]
pub struct LogSink {
    batch: FigureBatch,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn batch(&self) -> &FigureBatch {
        &self.batch
    }
}

impl FigureSink for LogSink {
    fn render_scatter(&mut self, xs: &[f64], ys: &[f64], colors: &[f64], title: &str) -> Result<()> {
        self.batch.queue(xs, ys, colors, title)
    }

    fn show(&mut self) -> Result<()> {
        for fig in self.batch.figures() {
            match fig.color_range() {
                Some((lo, hi)) => log::info!(
                    "{}: {} points, intensity {:.4}..{:.4}",
                    fig.title,
                    fig.len(),
                    lo,
                    hi
                ),
                None => log::info!("{}: no points", fig.title),
            }
        }
        Ok(())
    }
}
