pub mod normalization;
pub mod pipeline;

pub use normalization::{ColorNormalizer, GlobalColorScale};
pub use pipeline::{ArchivePipeline, LoadProgress, LogProgress, PipelineOutput};
