pub mod viewer_sink;

pub use viewer_sink::ViewerSink;
