//! # Classguard Classpath Errors
//!
//! Defines error types specific to the classpath subsystem.
//!
//! [`ClasspathError`] covers malformed archive names handed over by a loader
//! and the terminal "collisions detected" outcome of a validation pass run
//! under the failing policy. Malformed *versions* are not errors here: the
//! whitelist evaluator treats them as a non-whitelisted collision.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClasspathError {
    #[error("Invalid archive name '{file_name}': {reason}")]
    InvalidArchiveName {
        file_name: String,
        reason: String,
    },

    #[error("Dependency collisions are not whitelisted: {}", .artifacts.join(", "))]
    CollisionsDetected {
        artifacts: Vec<String>,
    },
}
