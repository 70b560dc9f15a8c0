use super::progress::LoadProgress;
use crate::data::{ArchiveConnector, ArchiveMetadata, GenerationRange};
use crate::engines::normalization::{ColorNormalizer, GlobalColorScale};
use crate::error::Result;
use crate::render::FigureSink;
use crate::render::ScatterFigure;
use crate::types::GenerationDataset;

/// Loads every sampled generation, then normalizes colors across all of them.
pub struct ArchivePipeline {
    connector: ArchiveConnector,
    range: GenerationRange,
}

/// Everything the run produced, ready to hand to a figure sink.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub datasets: Vec<GenerationDataset>,
    pub metadata: Vec<ArchiveMetadata>,
    pub scale: GlobalColorScale,
}

impl ArchivePipeline {
    pub fn new(connector: ArchiveConnector, range: GenerationRange) -> Self {
        Self { connector, range }
    }

    /// Load generations in ascending order. The first failure aborts the run.
    pub fn load_all(
        &self,
        progress: &mut dyn LoadProgress,
    ) -> Result<(Vec<GenerationDataset>, Vec<ArchiveMetadata>)> {
        let total = self.range.count();
        let mut datasets = Vec::new();
        let mut metadata = Vec::new();

        for generation in self.range.iter() {
            let (dataset, meta) = self.connector.load(generation)?;
            progress.on_generation_loaded(&meta, datasets.len() + 1, total);
            datasets.push(dataset);
            metadata.push(meta);
        }

        Ok((datasets, metadata))
    }

    pub fn run(&self, progress: &mut dyn LoadProgress) -> Result<PipelineOutput> {
        if self.range.is_empty() {
            log::warn!("No generations to read from {}", self.connector.folder().display());
        } else {
            log::info!(
                "Reading {} generations (every {}) from {}",
                self.range.count(),
                self.range.period(),
                self.connector.folder().display()
            );
        }

        let (mut datasets, metadata) = self.load_all(progress)?;
        let scale = ColorNormalizer::normalize(&mut datasets)?;
        progress.on_normalized(&scale);

        Ok(PipelineOutput {
            datasets,
            metadata,
            scale,
        })
    }
}

impl PipelineOutput {
    /// Queue one figure per generation, in generation order.
    pub fn render_into(&self, sink: &mut dyn FigureSink) -> Result<()> {
        for ds in &self.datasets {
            let title = ScatterFigure::title_for(ds.generation.value());
            sink.render_scatter(ds.xs(), ds.ys(), ds.colors(), &title)?;
        }
        Ok(())
    }
}
