use super::scale::GlobalColorScale;
use crate::error::{ArchiveplotError, Result};
use crate::types::GenerationDataset;

pub struct ColorNormalizer;

impl ColorNormalizer {
    /// Scale every generation's colors by one shared maximum and store the
    /// result back into each dataset. A dataset can only be normalized once.
    pub fn normalize(datasets: &mut [GenerationDataset]) -> Result<GlobalColorScale> {
        if let Some(done) = datasets.iter().find(|ds| ds.is_normalized()) {
            return Err(ArchiveplotError::AlreadyNormalized(done.generation.value()));
        }

        let scale = GlobalColorScale::from_datasets(datasets);
        match scale.factor() {
            Ok(max) => log::info!("Global color scale: {}", max),
            Err(err) => log::warn!("{}; all colors set to zero", err),
        }

        for ds in datasets.iter_mut() {
            let scaled = scale.apply(ds.colors());
            ds.replace_colors(scaled)?;
        }

        Ok(scale)
    }
}
