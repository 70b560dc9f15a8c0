use crate::error::{ArchiveplotError, Result};
use crate::types::GenerationIndex;

/// Sampled generations `0, period, 2 * period, ...` up to and including
/// `max_gens` when it lands on a step. A negative `max_gens` samples nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRange {
    period: u64,
    max_gens: Option<u64>,
}

impl GenerationRange {
    pub fn new(period: u64, max_gens: i64) -> Result<Self> {
        if period == 0 {
            return Err(ArchiveplotError::Configuration(
                "Dump period must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            period,
            max_gens: u64::try_from(max_gens).ok(),
        })
    }

    pub fn period(&self) -> u64 {
        self.period
    }

    /// Number of sampled generations, saturating at `usize::MAX`.
    pub fn count(&self) -> usize {
        match self.max_gens {
            None => 0,
            Some(max) => usize::try_from(max / self.period)
                .map_or(usize::MAX, |steps| steps.saturating_add(1)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.max_gens.is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = GenerationIndex> {
        let step = usize::try_from(self.period).unwrap_or(usize::MAX);
        self.max_gens
            .into_iter()
            .flat_map(move |max| (0..=max).step_by(step))
            .map(GenerationIndex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(range: &GenerationRange) -> Vec<u64> {
        range.iter().map(|g| g.value()).collect()
    }

    #[test]
    fn test_inclusive_when_on_step() {
        let range = GenerationRange::new(10, 30).unwrap();
        assert_eq!(values(&range), vec![0, 10, 20, 30]);
        assert_eq!(range.count(), 4);
    }

    #[test]
    fn test_exclusive_when_off_step() {
        let range = GenerationRange::new(10, 35).unwrap();
        assert_eq!(values(&range), vec![0, 10, 20, 30]);
        assert_eq!(range.count(), 4);
    }

    #[test]
    fn test_period_larger_than_max() {
        let range = GenerationRange::new(100, 40).unwrap();
        assert_eq!(values(&range), vec![0]);
        assert_eq!(range.count(), 1);
    }

    #[test]
    fn test_zero_max_gens() {
        let range = GenerationRange::new(5, 0).unwrap();
        assert_eq!(values(&range), vec![0]);
    }

    #[test]
    fn test_negative_max_gens_is_empty() {
        let range = GenerationRange::new(5, -3).unwrap();
        assert!(range.is_empty());
        assert_eq!(range.count(), 0);
        assert_eq!(range.iter().count(), 0);
    }

    #[test]
    fn test_zero_period_rejected() {
        assert!(matches!(
            GenerationRange::new(0, 10),
            Err(ArchiveplotError::Configuration(_))
        ));
    }

    #[test]
    fn test_huge_range_count_saturates() {
        let range = GenerationRange::new(1, i64::MAX).unwrap();
        assert!(range.count() >= 1);
        assert_eq!(values_prefix(&range, 3), vec![0, 1, 2]);
    }

    fn values_prefix(range: &GenerationRange, n: usize) -> Vec<u64> {
        range.iter().take(n).map(|g| g.value()).collect()
    }

    #[test]
    fn test_count_matches_iteration() {
        for period in 1..12 {
            for max_gens in -3..50 {
                let range = GenerationRange::new(period, max_gens).unwrap();
                assert_eq!(range.count(), range.iter().count());
            }
        }
    }
}
