use crate::Result;
use crate::host::HostLogger;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Per-project state captured once when the plugin attaches.
///
/// Fields are private and never change after construction; every
/// interceptor of the project shares a clone.
#[derive(Clone)]
pub struct ProjectContext {
    root: PathBuf,
    logger: Arc<dyn HostLogger>,
}

impl ProjectContext {
    pub fn new(root: impl Into<PathBuf>, logger: Arc<dyn HostLogger>) -> Self {
        Self {
            root: root.into(),
            logger,
        }
    }

    /// Build a context from the host's project name, which is the path of
    /// the file defining the project. The root is its directory, made
    /// absolute against the current directory when relative.
    pub fn from_project_name(project_name: &str, logger: Arc<dyn HostLogger>) -> Result<Self> {
        let root = match Path::new(project_name).parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        Ok(Self::new(std::path::absolute(root)?, logger))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn logger(&self) -> &dyn HostLogger {
        self.logger.as_ref()
    }
}

impl std::fmt::Debug for ProjectContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectContext")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}
