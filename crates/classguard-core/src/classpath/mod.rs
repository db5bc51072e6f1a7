//! # Classguard Classpath Subsystem
//!
//! Inventories the third-party artifacts bundled by every stage library and
//! decides which cross-library version collisions are safe to tolerate.
//!
//! ## Key Submodules and Responsibilities:
//!
//! - **[`dependency`]**: The [`Dependency`] identity pair and its
//!   library-tagged observation, [`BundledDependency`].
//! - **[`version`]**: Parsing version strings into [`ParsedVersion`].
//! - **[`inventory`]**: The aggregator grouping observations by artifact
//!   name and version ([`Inventory`]).
//! - **[`collision`]**: Detecting artifacts bundled at more than one version.
//! - **[`whitelist`]**: The [`Whitelist`] of permitted major versions and the
//!   policy evaluation that classifies each collision.
//! - **[`error`]**: [`ClasspathError`](error::ClasspathError).
pub mod dependency;
pub mod version;
pub mod inventory;
pub mod collision;
pub mod whitelist;
pub mod error;

pub use dependency::{BundledDependency, Dependency};
pub use version::{ParsedVersion, VersionError};
pub use inventory::{Inventory, VersionMap};
pub use collision::{detect_collisions, CollisionGroup};
pub use whitelist::{Verdict, Whitelist, WhitelistBuilder};
pub use error::ClasspathError;

// Test module declaration
#[cfg(test)]
mod tests;
