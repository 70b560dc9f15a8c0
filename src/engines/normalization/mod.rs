pub mod scale;
pub mod normalizer;

pub use scale::GlobalColorScale;
pub use normalizer::ColorNormalizer;
