mod archive;
mod types;
mod validator;

pub use archive::ArchiveConnector;
pub use types::{
    ArchiveMetadata,
    ArchiveRecord,
    ColumnLayout,
};
pub use validator::RecordValidator;
