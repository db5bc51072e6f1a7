//! # Classguard Configuration
//!
//! Loading of the operator-maintained whitelist and of library manifests.
//! JSON is always available; TOML and YAML sit behind the `toml-config` and
//! `yaml-config` features.
pub mod error;
pub mod format;
pub mod whitelist_file;

pub use error::ConfigError;
pub use format::{load_file, ConfigFormat};
pub use whitelist_file::{load_whitelist, WhitelistConfig};
