pub mod figure;
pub mod sink;

pub use figure::{gray_level, ScatterFigure};
pub use sink::{FigureBatch, FigureSink, LogSink};
