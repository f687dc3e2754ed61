//! Filesystem-backed project-information provider
//!
//! Stands in for a real host's provider: contents come straight from disk
//! and relative imports resolve the way a typed-superset compiler searches
//! for them. It has no idea `.tzen` exists.

use crate::Result;
use crate::host::{
    Extension, LanguageServiceHost, ModuleNameLiteral, ModuleResolution, ResolutionOptions,
    ResolvedModule, ScriptKind, ScriptSnapshot,
};
use crate::plugin::resolution::resolve_path;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

pub struct FsHost {
    root: PathBuf,
    files: Vec<String>,
}

impl FsHost {
    pub fn new(root: impl Into<PathBuf>, files: Vec<String>) -> Self {
        Self {
            root: root.into(),
            files,
        }
    }

    fn read(path: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn resolve_one(&self, literal: &ModuleNameLiteral, containing_file: &str, options: &ResolutionOptions) -> ModuleResolution {
        let text = literal.text.as_str();
        if !(text.starts_with("./") || text.starts_with("../") || text.starts_with('/')) {
            // Package lookups belong to the real host.
            return ModuleResolution::unresolved(Vec::new());
        }

        let dir = Path::new(containing_file).parent().unwrap_or_else(|| Path::new(""));
        let base = resolve_path(dir, text);

        let mut candidates = Vec::new();
        if Extension::of(&base).is_some() {
            candidates.push(base.clone());
        }
        for ext in &options.extensions {
            candidates.push(format!("{}{}", base, ext));
        }
        for ext in &options.extensions {
            candidates.push(format!("{}/index{}", base, ext));
        }

        let mut failed = Vec::new();
        for candidate in candidates {
            if Path::new(&candidate).is_file() {
                let extension = Extension::of(&candidate).unwrap_or(Extension::Ts);
                return ModuleResolution {
                    resolved_module: Some(ResolvedModule {
                        resolved_file_name: candidate,
                        extension,
                        is_external_library_import: false,
                    }),
                    failed_lookup_locations: failed,
                };
            }
            failed.push(candidate);
        }

        tracing::debug!("Could not resolve '{}' from {}", text, containing_file);
        ModuleResolution::unresolved(failed)
    }
}

impl LanguageServiceHost for FsHost {
    fn get_current_directory(&self) -> String {
        self.root.to_string_lossy().into_owned()
    }

    fn get_script_file_names(&self) -> Vec<String> {
        self.files.clone()
    }

    fn get_script_version(&self, file_name: &str) -> String {
        match std::fs::metadata(file_name) {
            Ok(meta) => {
                let modified = meta
                    .modified()
                    .ok()
                    .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
                    .map(|d| d.as_millis())
                    .unwrap_or(0);
                format!("{}-{}", meta.len(), modified)
            }
            Err(_) => "0".to_string(),
        }
    }

    fn get_script_kind(&self, file_name: &str) -> ScriptKind {
        ScriptKind::from_path(file_name)
    }

    fn get_script_snapshot(&self, file_name: &str) -> Result<Option<ScriptSnapshot>> {
        Ok(Self::read(file_name)?.map(ScriptSnapshot::from_string))
    }

    fn resolve_module_name_literals(
        &self,
        literals: &[ModuleNameLiteral],
        containing_file: &str,
        options: &ResolutionOptions,
    ) -> Result<Vec<ModuleResolution>> {
        Ok(literals
            .iter()
            .map(|literal| self.resolve_one(literal, containing_file, options))
            .collect())
    }

    fn file_exists(&self, path: &str) -> bool {
        Path::new(path).is_file()
    }

    fn read_file(&self, path: &str) -> Result<Option<String>> {
        Self::read(path)
    }
}
