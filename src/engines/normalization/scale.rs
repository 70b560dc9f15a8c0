use crate::error::{ArchiveplotError, Result};
use crate::types::GenerationDataset;

/// Shared color divisor for one run, reduced once over every generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlobalColorScale {
    /// No color values were seen at all
    Empty,
    /// Every color value is exactly zero
    Zero,
    Max(f64),
}

impl GlobalColorScale {
    pub fn from_datasets(datasets: &[GenerationDataset]) -> Self {
        Self::from_sequences(datasets.iter().map(|ds| ds.colors()))
    }

    /// Reduce any collection of absolute-valued color sequences.
    pub fn from_sequences<'a, I>(sequences: I) -> Self
    where
        I: IntoIterator<Item = &'a [f64]>,
    {
        let max = sequences
            .into_iter()
            .flat_map(|seq| seq.iter().copied())
            .reduce(f64::max);

        match max {
            None => Self::Empty,
            Some(m) if m == 0.0 => Self::Zero,
            Some(m) => Self::Max(m),
        }
    }

    /// Divisor to apply, or `DegenerateScale` when none exists.
    pub fn factor(&self) -> Result<f64> {
        match self {
            Self::Max(m) => Ok(*m),
            Self::Zero => Err(ArchiveplotError::DegenerateScale(
                "every color value is zero".to_string(),
            )),
            Self::Empty => Err(ArchiveplotError::DegenerateScale(
                "no color values were loaded".to_string(),
            )),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        !matches!(self, Self::Max(_))
    }

    /// Scale one sequence. Degenerate scales map every entry to zero.
    pub fn apply(&self, colors: &[f64]) -> Vec<f64> {
        match self.factor() {
            Ok(max) => colors.iter().map(|c| c / max).collect(),
            Err(_) => vec![0.0; colors.len()],
        }
    }
}
