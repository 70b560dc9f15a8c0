use super::{archive::ArchiveConfig, traits::ConfigSection, viewer::ViewerConfig};
use crate::error::ArchiveplotError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub archive: ArchiveConfig,
    pub viewer: ViewerConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ArchiveplotError> {
        self.archive.validate().map_err(section_error::<ArchiveConfig>)?;
        self.viewer.validate().map_err(section_error::<ViewerConfig>)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, ArchiveplotError> {
        toml::to_string_pretty(self)
            .map_err(|e| ArchiveplotError::Configuration(format!("Failed to serialize: {}", e)))
    }
}

fn section_error<S: ConfigSection>(err: ArchiveplotError) -> ArchiveplotError {
    match err {
        ArchiveplotError::Configuration(msg) => {
            ArchiveplotError::Configuration(format!("[{}] {}", S::section_name(), msg))
        }
        other => other,
    }
}

#[derive(Debug, Default)]
pub struct ConfigManager {
    config: AppConfig,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer a TOML file over the defaults. Keys missing from the file keep
    /// their default values.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ArchiveplotError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ArchiveplotError::Configuration(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let settings = config::Config::builder()
            .add_source(config::File::new(
                &path.to_string_lossy(),
                config::FileFormat::Toml,
            ))
            .build()?;
        let config: AppConfig = settings.try_deserialize()?;

        config.validate()?;
        log::debug!("Loaded configuration from {}", path.display());

        self.config = config;
        Ok(())
    }

    pub fn get(&self) -> &AppConfig {
        &self.config
    }
}
