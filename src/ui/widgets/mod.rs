pub mod figure_list;
pub mod scatter_plot;

pub use figure_list::FigureList;
pub use scatter_plot::ScatterPlot;
