//! # Classguard Startup Reporter
//!
//! Renders the findings of a validation pass and decides, per the configured
//! [`CollisionPolicy`], whether non-whitelisted collisions abort stage
//! library registration or only raise warnings.
pub mod policy;
pub mod reporter;

pub use policy::CollisionPolicy;
pub use reporter::{CollisionFinding, CollisionReport, StartupReporter};

#[cfg(test)]
mod tests;
