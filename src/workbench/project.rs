use crate::extension::is_foreign;
use crate::host::{Extension, HostLogger, Project, TracingLogger};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Directories never scanned for project files
const SKIPPED_DIRS: &[&str] = &["node_modules", ".git", "target", "dist"];

/// A project rooted at a directory on disk.
///
/// The file list is re-walked on every request, honouring `.gitignore`.
pub struct FsProject {
    root: PathBuf,
    logger: Arc<dyn HostLogger>,
}

impl FsProject {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_logger(root, Arc::new(TracingLogger))
    }

    pub fn with_logger(root: impl Into<PathBuf>, logger: Arc<dyn HostLogger>) -> Self {
        Self {
            root: root.into(),
            logger,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn is_project_file(path: &str) -> bool {
    is_foreign(path) || Extension::of(path).is_some_and(|ext| ext != Extension::Json)
}

impl Project for FsProject {
    fn project_name(&self) -> String {
        self.root.join("tsconfig.json").to_string_lossy().into_owned()
    }

    fn file_names(&self) -> Vec<String> {
        let walker = WalkBuilder::new(&self.root)
            .filter_entry(|entry| {
                entry
                    .file_name()
                    .to_str()
                    .map(|name| !SKIPPED_DIRS.contains(&name))
                    .unwrap_or(true)
            })
            .build();

        let mut files: Vec<String> = walker
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry under {}: {}", self.root.display(), e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
            .map(|entry| entry.path().to_string_lossy().into_owned())
            .filter(|path| is_project_file(path))
            .collect();

        files.sort();
        files
    }

    fn logger(&self) -> Arc<dyn HostLogger> {
        self.logger.clone()
    }
}
