pub mod traits;
pub mod archive;
pub mod viewer;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use archive::ArchiveConfig;
pub use viewer::ViewerConfig;
