//! Provider-side interception
//!
//! [`HostInterceptor`] owns the host's original provider and stands in for
//! it. Three methods are claimed for foreign files; the rest are one-line
//! forwards.

use super::resolution::override_foreign_resolutions;
use super::synthesis::ContentSynthesizer;
use crate::Result;
use crate::extension::is_foreign;
use crate::host::{
    LanguageServiceHost, ModuleNameLiteral, ModuleResolution, ResolutionOptions, ScriptKind,
    ScriptSnapshot, Storage,
};
use std::sync::Arc;

pub struct HostInterceptor {
    inner: Arc<dyn LanguageServiceHost>,
    storage: Arc<dyn Storage>,
    synthesizer: Arc<dyn ContentSynthesizer>,
}

impl HostInterceptor {
    pub fn new(
        inner: Arc<dyn LanguageServiceHost>,
        storage: Arc<dyn Storage>,
        synthesizer: Arc<dyn ContentSynthesizer>,
    ) -> Self {
        Self {
            inner,
            storage,
            synthesizer,
        }
    }
}

impl LanguageServiceHost for HostInterceptor {
    fn get_current_directory(&self) -> String {
        self.inner.get_current_directory()
    }

    fn get_script_file_names(&self) -> Vec<String> {
        self.inner.get_script_file_names()
    }

    fn get_script_version(&self, file_name: &str) -> String {
        self.inner.get_script_version(file_name)
    }

    fn get_script_kind(&self, file_name: &str) -> ScriptKind {
        if is_foreign(file_name) {
            return ScriptKind::Ts;
        }
        self.inner.get_script_kind(file_name)
    }

    fn get_script_snapshot(&self, file_name: &str) -> Result<Option<ScriptSnapshot>> {
        // Checked on every call: the file may appear or vanish between requests.
        if is_foreign(file_name) && self.storage.exists(file_name)? {
            tracing::debug!("Serving synthesized snapshot for {}", file_name);
            return self.synthesizer.synthesize(file_name).map(Some);
        }
        self.inner.get_script_snapshot(file_name)
    }

    fn resolve_module_name_literals(
        &self,
        literals: &[ModuleNameLiteral],
        containing_file: &str,
        options: &ResolutionOptions,
    ) -> Result<Vec<ModuleResolution>> {
        // The host sees the whole batch, foreign entries included, so its
        // caches and diagnostics observe every attempt.
        let defaults = self
            .inner
            .resolve_module_name_literals(literals, containing_file, options)?;
        override_foreign_resolutions(literals, containing_file, defaults)
    }

    fn file_exists(&self, path: &str) -> bool {
        self.inner.file_exists(path)
    }

    fn read_file(&self, path: &str) -> Result<Option<String>> {
        self.inner.read_file(path)
    }
}
