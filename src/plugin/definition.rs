//! Definition redirection
//!
//! Answers "go to definition" with a location inside a `.tzen` file. There
//! is no position mapping between the synthesized declaration and the
//! foreign source yet, so the stock [`FixedDefinitionResolver`] always
//! points at the same span of the project's canonical foreign file.

use super::context::ProjectContext;
use super::resolution::resolve_path;
use crate::Result;
use crate::host::{DefinitionInfo, DefinitionInfoAndBoundSpan, ScriptElementKind, TextSpan};

/// Canonical foreign file, relative to the project root.
pub const CANONICAL_DEFINITION_FILE: &str = "a.tzen";

/// Span every redirected definition highlights.
///
/// Provisional: it proves the redirection end to end and is not derived
/// from the foreign file's content.
pub const DEFINITION_SPAN: TextSpan = TextSpan { start: 5, length: 5 };

/// Computes definition targets for a request on a project.
pub trait DefinitionResolver: Send + Sync {
    /// The foreign file requests on `context` are redirected into
    fn canonical_path(&self, context: &ProjectContext) -> String;

    fn resolve_definition(
        &self,
        context: &ProjectContext,
        file_name: &str,
        position: usize,
    ) -> Result<DefinitionInfoAndBoundSpan>;
}

/// Stub resolver that ignores the request and returns one fixed target.
#[derive(Debug, Clone)]
pub struct FixedDefinitionResolver {
    file_name: String,
}

impl FixedDefinitionResolver {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }
}

impl Default for FixedDefinitionResolver {
    fn default() -> Self {
        Self::new(CANONICAL_DEFINITION_FILE)
    }
}

impl DefinitionResolver for FixedDefinitionResolver {
    fn canonical_path(&self, context: &ProjectContext) -> String {
        resolve_path(context.root(), &self.file_name)
    }

    fn resolve_definition(
        &self,
        context: &ProjectContext,
        _file_name: &str,
        _position: usize,
    ) -> Result<DefinitionInfoAndBoundSpan> {
        Ok(DefinitionInfoAndBoundSpan {
            definitions: vec![DefinitionInfo {
                file_name: self.canonical_path(context),
                text_span: DEFINITION_SPAN,
                kind: ScriptElementKind::Unknown,
                name: String::new(),
                container_kind: ScriptElementKind::Unknown,
                container_name: String::new(),
            }],
            // ignored by the host
            text_span: TextSpan::default(),
        })
    }
}
