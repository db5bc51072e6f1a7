use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::classpath::whitelist::Whitelist;
use crate::config::error::ConfigError;
use crate::config::format::load_file;

fn default_include_builtin() -> bool {
    true
}

/// On-disk form of a whitelist.
///
/// ```toml
/// include_builtin = true
///
/// [artifacts]
/// netty = [3, 4]
/// protobuf-java = [2, 3]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhitelistConfig {
    /// Start from the shipped policy before adding these entries
    #[serde(default = "default_include_builtin")]
    pub include_builtin: bool,

    /// Artifact name -> permitted major versions
    #[serde(default)]
    pub artifacts: BTreeMap<String, Vec<u64>>,
}

impl Default for WhitelistConfig {
    fn default() -> Self {
        Self {
            include_builtin: default_include_builtin(),
            artifacts: BTreeMap::new(),
        }
    }
}

impl WhitelistConfig {
    /// Read a whitelist file (JSON, TOML or YAML)
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: WhitelistConfig = load_file(path)?;
        log::info!(
            "Loaded whitelist from {} ({} artifact entries, builtin {})",
            path.display(),
            config.artifacts.len(),
            if config.include_builtin { "included" } else { "excluded" }
        );
        Ok(config)
    }

    /// Build the immutable whitelist this configuration describes
    pub fn into_whitelist(self) -> Whitelist {
        let mut builder = Whitelist::builder();
        if self.include_builtin {
            builder = builder.merge(&Whitelist::builtin());
        }
        for (artifact, majors) in self.artifacts {
            builder = builder.allow(artifact, majors);
        }
        builder.build()
    }
}

/// Load a whitelist file (JSON, TOML or YAML)
pub fn load_whitelist(path: &Path) -> Result<Whitelist, ConfigError> {
    Ok(WhitelistConfig::load(path)?.into_whitelist())
}
