//! # tzen-bridge - .tzen files as first-class sources for a code-intelligence host
//!
//! The host (a language service and the project-information provider it reads
//! from) knows nothing about `.tzen`. This crate sits between the two and
//! claims a handful of queries on the foreign format's behalf:
//! - script-kind classification, snapshot retrieval and module resolution
//!   on the provider side
//! - "go to definition" on the service side
//! - the list of extra files the host should keep tracking
//!
//! Everything it does not claim is forwarded to the host objects it wraps.

pub mod extension;
pub mod host;
pub mod plugin;
pub mod workbench;
pub mod config;
pub mod output;
pub mod ui;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for convenient access
pub use extension::{is_foreign, FOREIGN_EXTENSION};
pub use host::{LanguageService, LanguageServiceFactory, LanguageServiceHost, Project};
pub use plugin::{PluginCreateInfo, PluginInstance, TzenPlugin};
pub use config::TzenConfig;

/// Result type alias for tzen-bridge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for tzen-bridge operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Host error: {0}")]
    Host(String),

    #[error("Host resolved {actual} module names for a batch of {expected}")]
    ResolutionMismatch { expected: usize, actual: usize },

    #[error("Config error: {0}")]
    Config(String),
}
