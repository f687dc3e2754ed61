//! Service-side interception
//!
//! [`ServiceInterceptor`] owns the language service the host built over the
//! intercepted provider. Definition lookup is claimed; everything else is
//! forwarded.

use super::context::ProjectContext;
use super::definition::DefinitionResolver;
use crate::Result;
use crate::host::{DefinitionInfoAndBoundSpan, LanguageService, QuickInfo};
use std::sync::Arc;

/// Prefix identifying this layer's lines in the host log.
pub const LOG_PREFIX: &str = "[tzen-bridge]";

pub struct ServiceInterceptor {
    inner: Box<dyn LanguageService>,
    context: ProjectContext,
    resolver: Arc<dyn DefinitionResolver>,
}

impl ServiceInterceptor {
    pub fn new(
        inner: Box<dyn LanguageService>,
        context: ProjectContext,
        resolver: Arc<dyn DefinitionResolver>,
    ) -> Self {
        Self {
            inner,
            context,
            resolver,
        }
    }
}

impl LanguageService for ServiceInterceptor {
    fn get_definition_and_bound_span(
        &self,
        file_name: &str,
        position: usize,
    ) -> Result<Option<DefinitionInfoAndBoundSpan>> {
        let target = self.resolver.canonical_path(&self.context);
        self.context
            .logger()
            .info(&format!("{} [tzenFilePath] {}", LOG_PREFIX, target));

        self.resolver
            .resolve_definition(&self.context, file_name, position)
            .map(Some)
    }

    fn get_quick_info_at_position(&self, file_name: &str, position: usize) -> Result<Option<QuickInfo>> {
        self.inner.get_quick_info_at_position(file_name, position)
    }

    fn get_program_file_names(&self) -> Result<Vec<String>> {
        self.inner.get_program_file_names()
    }
}
