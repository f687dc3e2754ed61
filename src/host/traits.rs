//! Host-side contracts
//!
//! The interception layer never implements a checker of its own. It consumes
//! the host through these traits and hands the host back objects that
//! implement the same traits.

use super::types::{
    DefinitionInfoAndBoundSpan, ModuleNameLiteral, ModuleResolution, QuickInfo, ResolutionOptions,
    ScriptKind, ScriptSnapshot,
};
use crate::Result;
use std::sync::Arc;

/// The host's project-information provider.
///
/// A language service reads everything it knows about a project through
/// this trait: which files exist, their contents, how imports resolve.
pub trait LanguageServiceHost: Send + Sync {
    /// Directory relative paths are interpreted against
    fn get_current_directory(&self) -> String;

    /// Root script files of the project
    fn get_script_file_names(&self) -> Vec<String>;

    /// Opaque version string; changes whenever the file's content does
    fn get_script_version(&self, file_name: &str) -> String;

    /// Grammar to parse `file_name` as
    fn get_script_kind(&self, file_name: &str) -> ScriptKind;

    /// Current content of `file_name`, or `None` if the host has none
    fn get_script_snapshot(&self, file_name: &str) -> Result<Option<ScriptSnapshot>>;

    /// Resolve a batch of import specifiers written in `containing_file`.
    ///
    /// The output is index-aligned with `literals`.
    fn resolve_module_name_literals(
        &self,
        literals: &[ModuleNameLiteral],
        containing_file: &str,
        options: &ResolutionOptions,
    ) -> Result<Vec<ModuleResolution>>;

    fn file_exists(&self, path: &str) -> bool;

    fn read_file(&self, path: &str) -> Result<Option<String>>;
}

/// The host's query/answer service.
pub trait LanguageService: Send + Sync {
    /// Definition targets for the symbol at `position` in `file_name`
    fn get_definition_and_bound_span(
        &self,
        file_name: &str,
        position: usize,
    ) -> Result<Option<DefinitionInfoAndBoundSpan>>;

    /// Hover information for `position` in `file_name`
    fn get_quick_info_at_position(&self, file_name: &str, position: usize) -> Result<Option<QuickInfo>>;

    /// Files the service's program currently contains
    fn get_program_file_names(&self) -> Result<Vec<String>>;
}

impl<T: LanguageService + ?Sized> LanguageService for Arc<T> {
    fn get_definition_and_bound_span(
        &self,
        file_name: &str,
        position: usize,
    ) -> Result<Option<DefinitionInfoAndBoundSpan>> {
        (**self).get_definition_and_bound_span(file_name, position)
    }

    fn get_quick_info_at_position(&self, file_name: &str, position: usize) -> Result<Option<QuickInfo>> {
        (**self).get_quick_info_at_position(file_name, position)
    }

    fn get_program_file_names(&self) -> Result<Vec<String>> {
        (**self).get_program_file_names()
    }
}

/// The host's tooling API: builds a language service over a provider.
pub trait LanguageServiceFactory: Send + Sync {
    fn create_language_service(&self, host: Arc<dyn LanguageServiceHost>) -> Box<dyn LanguageService>;
}

impl<F> LanguageServiceFactory for F
where
    F: Fn(Arc<dyn LanguageServiceHost>) -> Box<dyn LanguageService> + Send + Sync,
{
    fn create_language_service(&self, host: Arc<dyn LanguageServiceHost>) -> Box<dyn LanguageService> {
        self(host)
    }
}

/// The host's logging facility.
pub trait HostLogger: Send + Sync {
    fn info(&self, message: &str);
}

/// A project as the host sees it.
pub trait Project: Send + Sync {
    /// Path of the file that defines the project (e.g. its tsconfig)
    fn project_name(&self) -> String;

    /// Live list of every file name in the project
    fn file_names(&self) -> Vec<String>;

    fn logger(&self) -> Arc<dyn HostLogger>;
}

/// Read-only view of the storage the host's files live on.
pub trait Storage: Send + Sync {
    fn exists(&self, path: &str) -> std::io::Result<bool>;
}

/// [`Storage`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskStorage;

impl Storage for DiskStorage {
    fn exists(&self, path: &str) -> std::io::Result<bool> {
        std::fs::exists(path)
    }
}

/// [`HostLogger`] that writes through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl HostLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }
}
