//! # Classguard Kernel
//!
//! Ties the subsystems together: the [`ClasspathValidator`] running a
//! validation pass, the crate-wide [`Error`](error::Error) and shared
//! constants.
pub mod constants;
pub mod error;
pub mod validator;

pub use validator::{find_whitelist_file, ClasspathValidator};
