//! Core utilities and types for the javadsl code generator.
//!
//! This crate provides the error taxonomy, render configuration and
//! generated-file plumbing shared by the emission and DSL crates.

mod config;
mod error;
mod file;
mod indent;

// Configuration
pub use config::{CONFIG_FILE_NAME, RenderConfig};
// Errors
pub use error::{Error, Result, require_not_blank};
// File operations
pub use file::{GeneratedFile, Overwrite, WriteResult};
pub use indent::Indent;
