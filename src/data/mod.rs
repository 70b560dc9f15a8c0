pub mod connectors;
pub mod generations;

pub use connectors::{ArchiveConnector, ArchiveMetadata, ArchiveRecord, ColumnLayout};
pub use generations::GenerationRange;
