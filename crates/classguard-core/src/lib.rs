//! # Classguard Core
//!
//! Dependency collision detection for stage libraries that each bundle their
//! own third-party artifacts. A validation pass inventories what every
//! library bundles, finds artifacts present at more than one version and
//! classifies each collision against an operator-maintained [`Whitelist`] of
//! major versions allowed to coexist.
pub mod classpath;
pub mod config;
pub mod kernel;
pub mod report;
pub mod source;

// Re-export key public types for the binary and embedders
pub use classpath::{Dependency, Inventory, ParsedVersion, Verdict, Whitelist};
pub use kernel::ClasspathValidator;
pub use kernel::error::{Error, Result};
pub use report::{CollisionPolicy, CollisionReport, StartupReporter};
pub use source::DependencySource;
