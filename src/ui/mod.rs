mod app;
mod panels;
mod state;
mod widgets;
mod services;

pub use app::ArchiveViewerApp;
pub use services::ViewerSink;
pub use state::ViewerState;
