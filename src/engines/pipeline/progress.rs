use crate::data::ArchiveMetadata;
use crate::engines::normalization::GlobalColorScale;

pub trait LoadProgress {
    fn on_generation_loaded(&mut self, metadata: &ArchiveMetadata, loaded: usize, total: usize);
    fn on_normalized(&mut self, scale: &GlobalColorScale);
}

pub struct LogProgress;

impl LoadProgress for LogProgress {
    fn on_generation_loaded(&mut self, metadata: &ArchiveMetadata, loaded: usize, total: usize) {
        log::info!(
            "[{}/{}] Generation {}: {} records from {}",
            loaded,
            total,
            metadata.generation,
            metadata.num_records,
            metadata.file_path.display()
        );
    }

    fn on_normalized(&mut self, scale: &GlobalColorScale) {
        if scale.is_degenerate() {
            log::debug!("Color scale is degenerate: {:?}", scale);
        }
    }
}
