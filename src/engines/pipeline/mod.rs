pub mod progress;
pub mod runner;

pub use progress::{LoadProgress, LogProgress};
pub use runner::{ArchivePipeline, PipelineOutput};
