use crate::error::{ArchiveplotError, Result};
use std::fmt;

/// One sampled generation of the experiment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GenerationIndex(pub u64);

impl GenerationIndex {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for GenerationIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parallel X / Y / color sequences read from one archive file.
///
/// `colors` holds absolute values straight after loading and the globally
/// scaled intensities once [`GenerationDataset::replace_colors`] has run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationDataset {
    pub generation: GenerationIndex,
    xs: Vec<f64>,
    ys: Vec<f64>,
    colors: Vec<f64>,
    normalized: bool,
}

impl GenerationDataset {
    pub fn new(generation: GenerationIndex) -> Self {
        Self {
            generation,
            xs: Vec::new(),
            ys: Vec::new(),
            colors: Vec::new(),
            normalized: false,
        }
    }

    /// Build a dataset from already-collected columns.
    pub fn from_columns(
        generation: GenerationIndex,
        xs: Vec<f64>,
        ys: Vec<f64>,
        colors: Vec<f64>,
    ) -> Result<Self> {
        if xs.len() != ys.len() || ys.len() != colors.len() {
            return Err(ArchiveplotError::ColumnMismatch {
                context: format!("generation {}", generation),
                x: xs.len(),
                y: ys.len(),
                color: colors.len(),
            });
        }
        Ok(Self {
            generation,
            xs,
            ys,
            colors: colors.into_iter().map(f64::abs).collect(),
            normalized: false,
        })
    }

    /// Append one record. The sign of `raw_color` is dropped here.
    pub fn push(&mut self, x: f64, y: f64, raw_color: f64) {
        self.xs.push(x);
        self.ys.push(y);
        self.colors.push(raw_color.abs());
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn colors(&self) -> &[f64] {
        &self.colors
    }

    pub fn is_normalized(&self) -> bool {
        self.normalized
    }

    /// Largest color value, `None` when the dataset holds no records.
    pub fn max_color(&self) -> Option<f64> {
        self.colors.iter().copied().reduce(f64::max)
    }

    /// Swap in the scaled color sequence. Only allowed once per dataset.
    pub fn replace_colors(&mut self, scaled: Vec<f64>) -> Result<()> {
        if self.normalized {
            return Err(ArchiveplotError::AlreadyNormalized(self.generation.value()));
        }
        if scaled.len() != self.colors.len() {
            return Err(ArchiveplotError::ColumnMismatch {
                context: format!("scaled colors of generation {}", self.generation),
                x: self.xs.len(),
                y: self.ys.len(),
                color: scaled.len(),
            });
        }
        self.colors = scaled;
        self.normalized = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_columns_aligned() {
        let mut ds = GenerationDataset::new(GenerationIndex(0));
        ds.push(0.25, 0.75, -3.2);
        ds.push(0.5, 0.5, 1.0);

        assert_eq!(ds.xs(), &[0.25, 0.5]);
        assert_eq!(ds.ys(), &[0.75, 0.5]);
        assert_eq!(ds.colors(), &[3.2, 1.0]);
        assert_eq!(ds.max_color(), Some(3.2));
    }

    #[test]
    fn test_replace_colors_only_once() {
        let mut ds =
            GenerationDataset::from_columns(GenerationIndex(5), vec![0.1], vec![0.2], vec![2.0])
                .unwrap();
        ds.replace_colors(vec![1.0]).unwrap();
        assert!(ds.is_normalized());

        let again = ds.replace_colors(vec![1.0]);
        assert!(matches!(again, Err(ArchiveplotError::AlreadyNormalized(5))));
    }

    #[test]
    fn test_from_columns_rejects_mismatch() {
        let result =
            GenerationDataset::from_columns(GenerationIndex(0), vec![0.1, 0.2], vec![0.2], vec![1.0]);
        assert!(matches!(
            result,
            Err(ArchiveplotError::ColumnMismatch { x: 2, y: 1, color: 1, .. })
        ));
    }

    #[test]
    fn test_replace_colors_rejects_wrong_length() {
        let mut ds =
            GenerationDataset::from_columns(GenerationIndex(3), vec![0.1], vec![0.2], vec![2.0])
                .unwrap();
        let result = ds.replace_colors(vec![1.0, 0.5]);
        assert!(matches!(result, Err(ArchiveplotError::ColumnMismatch { color: 2, .. })));
        assert!(!ds.is_normalized());
    }

    #[test]
    fn test_empty_dataset_has_no_max() {
        let ds = GenerationDataset::new(GenerationIndex(0));
        assert!(ds.is_empty());
        assert_eq!(ds.max_color(), None);
    }
}
