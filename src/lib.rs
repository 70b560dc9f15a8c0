pub mod cli;
pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod render;
pub mod types;
pub mod ui;

pub use error::{ArchiveplotError, Result};
