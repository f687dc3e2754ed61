//! Content synthesis
//!
//! Turns a `.tzen` file into text the host's checker can parse. Only a
//! placeholder exists today; a real transpiler plugs in behind
//! [`ContentSynthesizer`].

use crate::Result;
use crate::host::ScriptSnapshot;
use std::sync::Arc;

/// Declaration handed to the checker for every foreign file.
pub const PLACEHOLDER_SOURCE: &str = "export type A = 1;";

/// Produces the snapshot the host sees for a foreign file.
pub trait ContentSynthesizer: Send + Sync {
    /// `path` is known to be foreign and present on storage.
    fn synthesize(&self, path: &str) -> Result<ScriptSnapshot>;
}

/// Stub synthesizer: the same fixed declaration for every file, whatever
/// the file actually contains.
#[derive(Debug, Clone)]
pub struct PlaceholderSynthesizer {
    source: Arc<str>,
}

impl PlaceholderSynthesizer {
    pub fn new(source: impl Into<Arc<str>>) -> Self {
        Self { source: source.into() }
    }
}

impl Default for PlaceholderSynthesizer {
    fn default() -> Self {
        Self::new(PLACEHOLDER_SOURCE)
    }
}

impl ContentSynthesizer for PlaceholderSynthesizer {
    fn synthesize(&self, path: &str) -> Result<ScriptSnapshot> {
        tracing::debug!("Synthesizing placeholder declaration for {}", path);
        Ok(ScriptSnapshot::from_string(self.source.clone()))
    }
}
