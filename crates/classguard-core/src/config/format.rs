use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::error::ConfigError;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yaml, .yml) - requires "yaml-config" feature
    #[cfg(feature = "yaml-config")]
    Yaml,
    /// TOML format (.toml) - requires "toml-config" feature
    #[cfg(feature = "toml-config")]
    Toml,
}

impl ConfigFormat {
    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => "yaml",
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => "toml",
        }
    }

    /// Determine format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "json" => Some(ConfigFormat::Json),
                #[cfg(feature = "yaml-config")]
                "yaml" | "yml" => Some(ConfigFormat::Yaml),
                #[cfg(feature = "toml-config")]
                "toml" => Some(ConfigFormat::Toml),
                _ => None,
            })
    }

    /// Deserialize a document of this format
    pub fn deserialize<T: DeserializeOwned>(&self, data: &str, path: &Path) -> Result<T, ConfigError> {
        let wrap = |source: Box<dyn std::error::Error + Send + Sync>| ConfigError::DeserializationError {
            format: self.extension().to_string(),
            path: path.to_path_buf(),
            source,
        };
        match self {
            ConfigFormat::Json => serde_json::from_str(data).map_err(|e| wrap(Box::new(e))),
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::from_str(data).map_err(|e| wrap(Box::new(e))),
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::from_str(data).map_err(|e| wrap(Box::new(e))),
        }
    }

    /// Serialize a value to this format
    pub fn serialize<T: Serialize>(&self, value: &T) -> Result<String, ConfigError> {
        let wrap = |source: Box<dyn std::error::Error + Send + Sync>| ConfigError::SerializationError {
            format: self.extension().to_string(),
            source,
        };
        match self {
            ConfigFormat::Json => serde_json::to_string_pretty(value).map_err(|e| wrap(Box::new(e))),
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::to_string(value).map_err(|e| wrap(Box::new(e))),
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::to_string_pretty(value).map_err(|e| wrap(Box::new(e))),
        }
    }
}

/// Read and deserialize a configuration file, picking the format from its extension
pub fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let format = ConfigFormat::from_path(path)
        .ok_or_else(|| ConfigError::UnsupportedConfigFormat(path.to_path_buf()))?;
    let data = fs::read_to_string(path)
        .map_err(|e| ConfigError::io(e, "read_config", path.to_path_buf()))?;
    log::debug!("Loaded {} bytes of {} config from {}", data.len(), format.extension(), path.display());
    format.deserialize(&data, path)
}
