//! Workbench host
//!
//! A small filesystem-backed host so the plugin can be driven end to end
//! without an editor: a project rooted at a directory, a provider reading
//! from disk and a checker-less service.

pub mod fs_host;
pub mod project;
pub mod service;

pub use fs_host::FsHost;
pub use project::FsProject;
pub use service::{WorkbenchService, WorkbenchServiceFactory};

use crate::Result;
use crate::config::TzenConfig;
use crate::host::Project;
use crate::plugin::{PluginCreateInfo, PluginInstance, TzenPlugin};
use std::path::Path;
use std::sync::Arc;

/// A directory opened as a project with the plugin attached.
pub struct Workbench {
    pub project: Arc<FsProject>,
    pub plugin: TzenPlugin,
    pub instance: PluginInstance,
}

impl Workbench {
    pub fn open(root: &Path, config: &TzenConfig) -> Result<Self> {
        let root = std::path::absolute(root)?;
        let project = Arc::new(FsProject::new(&root));

        let plugin = TzenPlugin::builder(WorkbenchServiceFactory).config(config).build();
        let host = Arc::new(FsHost::new(&root, project.file_names()));
        let instance = plugin.create(PluginCreateInfo {
            project: project.clone(),
            language_service_host: host,
            config: serde_json::Value::Null,
        })?;

        Ok(Self {
            project,
            plugin,
            instance,
        })
    }

    /// Foreign files of the project, as the host would be told to track them
    pub fn external_files(&self) -> Vec<String> {
        self.plugin.get_external_files(self.project.as_ref())
    }
}
