//! Interception layer
//!
//! The host attaches [`TzenPlugin`] once per project. `create` wraps the
//! host's provider in a [`HostInterceptor`], asks the host's tooling API for
//! a language service over that wrapper, and wraps the result in a
//! [`ServiceInterceptor`]:
//!
//! ```text
//! request ──▶ ServiceInterceptor ──▶ host LanguageService ──▶ HostInterceptor ──▶ host provider
//!               (definitions)                                  (kind, snapshot,
//!                                                               resolution)
//! ```
//!
//! The synthesized content and the definition target are stubs; both sit
//! behind capabilities ([`ContentSynthesizer`], [`DefinitionResolver`]) that
//! the builder can swap without touching the plumbing.

pub mod context;
pub mod definition;
pub mod external_files;
pub mod host_interceptor;
pub mod resolution;
pub mod service_interceptor;
pub mod synthesis;

pub use context::ProjectContext;
pub use definition::{DefinitionResolver, FixedDefinitionResolver};
pub use external_files::external_files;
pub use host_interceptor::HostInterceptor;
pub use service_interceptor::ServiceInterceptor;
pub use synthesis::{ContentSynthesizer, PlaceholderSynthesizer};

use crate::Result;
use crate::config::TzenConfig;
use crate::host::{DiskStorage, LanguageServiceFactory, LanguageServiceHost, Project, Storage};
use std::sync::Arc;

/// What the host hands the plugin when a project opens.
pub struct PluginCreateInfo {
    pub project: Arc<dyn Project>,
    pub language_service_host: Arc<dyn LanguageServiceHost>,
    /// The plugin's entry from the project configuration, `Null` if none
    pub config: serde_json::Value,
}

/// The objects the host uses in place of its own for one project.
pub struct PluginInstance {
    pub host: Arc<HostInterceptor>,
    pub service: ServiceInterceptor,
}

/// Plugin entry point, holding the host's tooling API reference.
pub struct TzenPlugin {
    factory: Arc<dyn LanguageServiceFactory>,
    storage: Arc<dyn Storage>,
    synthesizer: Arc<dyn ContentSynthesizer>,
    resolver: Arc<dyn DefinitionResolver>,
}

impl TzenPlugin {
    /// Plugin with the stock stubs and local-disk storage
    pub fn new(factory: impl LanguageServiceFactory + 'static) -> Self {
        Self::builder(factory).build()
    }

    pub fn builder(factory: impl LanguageServiceFactory + 'static) -> TzenPluginBuilder {
        TzenPluginBuilder {
            factory: Arc::new(factory),
            storage: None,
            synthesizer: None,
            resolver: None,
        }
    }

    /// Attach to a newly opened project.
    ///
    /// Keys present in the plugin entry replace the matching stub for this
    /// project only; absent keys keep what the plugin was built with.
    pub fn create(&self, info: PluginCreateInfo) -> Result<PluginInstance> {
        let project_name = info.project.project_name();
        let context = ProjectContext::from_project_name(&project_name, info.project.logger())?;
        tracing::info!("Attaching to project {} (root {})", project_name, context.root().display());

        let (synthesizer, resolver) = self.capabilities_for(info.config)?;

        let host = Arc::new(HostInterceptor::new(
            info.language_service_host,
            self.storage.clone(),
            synthesizer,
        ));
        let inner = self
            .factory
            .create_language_service(host.clone() as Arc<dyn LanguageServiceHost>);
        let service = ServiceInterceptor::new(inner, context, resolver);

        Ok(PluginInstance { host, service })
    }

    fn capabilities_for(
        &self,
        entry: serde_json::Value,
    ) -> Result<(Arc<dyn ContentSynthesizer>, Arc<dyn DefinitionResolver>)> {
        let mut synthesizer = self.synthesizer.clone();
        let mut resolver = self.resolver.clone();
        if entry.is_null() {
            return Ok((synthesizer, resolver));
        }

        let has = |key: &str| entry.get(key).is_some();
        let (has_placeholder, has_definition) = (has("placeholderSource"), has("definitionFile"));
        let config = TzenConfig::from_plugin_entry(entry)?;

        if has_placeholder {
            synthesizer = Arc::new(PlaceholderSynthesizer::new(config.placeholder_source.as_str()));
        }
        if has_definition {
            resolver = Arc::new(FixedDefinitionResolver::new(config.definition_file.as_str()));
        }
        Ok((synthesizer, resolver))
    }

    /// Foreign files the host should track for `project`, read from its
    /// live file list on every call.
    pub fn get_external_files(&self, project: &dyn Project) -> Vec<String> {
        external_files(&project.file_names())
    }
}

pub struct TzenPluginBuilder {
    factory: Arc<dyn LanguageServiceFactory>,
    storage: Option<Arc<dyn Storage>>,
    synthesizer: Option<Arc<dyn ContentSynthesizer>>,
    resolver: Option<Arc<dyn DefinitionResolver>>,
}

impl TzenPluginBuilder {
    /// Use the stub capabilities parameterised by `config`.
    pub fn config(mut self, config: &TzenConfig) -> Self {
        self.synthesizer = Some(Arc::new(PlaceholderSynthesizer::new(
            config.placeholder_source.as_str(),
        )));
        self.resolver = Some(Arc::new(FixedDefinitionResolver::new(
            config.definition_file.as_str(),
        )));
        self
    }

    pub fn storage(mut self, storage: impl Storage + 'static) -> Self {
        self.storage = Some(Arc::new(storage));
        self
    }

    pub fn synthesizer(mut self, synthesizer: impl ContentSynthesizer + 'static) -> Self {
        self.synthesizer = Some(Arc::new(synthesizer));
        self
    }

    pub fn definition_resolver(mut self, resolver: impl DefinitionResolver + 'static) -> Self {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    pub fn build(self) -> TzenPlugin {
        TzenPlugin {
            factory: self.factory,
            storage: self.storage.unwrap_or_else(|| Arc::new(DiskStorage)),
            synthesizer: self
                .synthesizer
                .unwrap_or_else(|| Arc::new(PlaceholderSynthesizer::default())),
            resolver: self
                .resolver
                .unwrap_or_else(|| Arc::new(FixedDefinitionResolver::default())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::host::{
        DefinitionInfoAndBoundSpan, LanguageService, ModuleNameLiteral, ResolutionOptions,
        ScriptKind, ScriptSnapshot,
    };
    use crate::testing::{FakeProject, FakeService, FakeStorage, RecordingHost, RecordingLogger};

    fn factory() -> impl LanguageServiceFactory {
        |host: Arc<dyn LanguageServiceHost>| -> Box<dyn LanguageService> {
            Box::new(FakeService::new(host))
        }
    }

    fn project(logger: Arc<RecordingLogger>, files: &[&str]) -> Arc<FakeProject> {
        Arc::new(FakeProject::new("/proj/tsconfig.json", files, logger))
    }

    #[test]
    fn test_end_to_end() {
        let logger = Arc::new(RecordingLogger::default());
        let storage = FakeStorage::default();
        storage.add("/proj/src/widget.tzen");

        let plugin = TzenPlugin::builder(factory()).storage(storage).build();
        let original = Arc::new(RecordingHost::default().with_files(&["/proj/src/app.ts", "/proj/src/widget.tzen"]));
        let instance = plugin.create(PluginCreateInfo {
            project: project(logger.clone(), &[]),
            language_service_host: original.clone(),
            config: serde_json::Value::Null,
        })
        .unwrap();

        // the host's service reads through the interceptor
        assert_eq!(
            instance.service.get_program_file_names().unwrap(),
            vec!["/proj/src/app.ts", "/proj/src/widget.tzen"]
        );
        assert_eq!(instance.host.get_script_kind("/proj/src/widget.tzen"), ScriptKind::Ts);

        let resolved = instance
            .host
            .resolve_module_name_literals(
                &[ModuleNameLiteral::new("./widget.tzen")],
                "/proj/src/app.ts",
                &ResolutionOptions::default(),
            )
            .unwrap();
        assert_eq!(
            resolved[0].resolved_module.as_ref().unwrap().resolved_file_name,
            "/proj/src/widget.tzen"
        );

        let definition = instance
            .service
            .get_definition_and_bound_span("/proj/src/app.ts", 0)
            .unwrap()
            .unwrap();
        assert_eq!(definition.definitions[0].file_name, "/proj/a.tzen");
        assert_eq!(logger.lines(), vec!["[tzen-bridge] [tzenFilePath] /proj/a.tzen"]);
    }

    #[test]
    fn test_external_files_follow_live_project() {
        let logger = Arc::new(RecordingLogger::default());
        let plugin = TzenPlugin::new(factory());
        let project = project(logger, &["a.ts", "b.tzen", "c.tzen.bak"]);

        assert_eq!(plugin.get_external_files(project.as_ref()), vec!["b.tzen"]);
        project.add_file("d.tzen");
        assert_eq!(plugin.get_external_files(project.as_ref()), vec!["b.tzen", "d.tzen"]);
    }

    #[test]
    fn test_config_parameterises_stubs() {
        let logger = Arc::new(RecordingLogger::default());
        let storage = FakeStorage::default();
        storage.add("/proj/x.tzen");
        let config = TzenConfig {
            definition_file: "types/root.tzen".to_string(),
            placeholder_source: "export type Root = string;".to_string(),
        };

        let plugin = TzenPlugin::builder(factory()).config(&config).storage(storage).build();
        let instance = plugin.create(PluginCreateInfo {
            project: project(logger, &[]),
            language_service_host: Arc::new(RecordingHost::default()),
            config: serde_json::Value::Null,
        })
        .unwrap();

        let snapshot = instance.host.get_script_snapshot("/proj/x.tzen").unwrap().unwrap();
        assert_eq!(snapshot.text(), "export type Root = string;");
        let definition = instance.service.get_definition_and_bound_span("", 0).unwrap().unwrap();
        assert_eq!(definition.definitions[0].file_name, "/proj/types/root.tzen");
    }

    struct EchoResolver;

    impl DefinitionResolver for EchoResolver {
        fn canonical_path(&self, context: &ProjectContext) -> String {
            FixedDefinitionResolver::default().canonical_path(context)
        }

        fn resolve_definition(
            &self,
            context: &ProjectContext,
            file_name: &str,
            position: usize,
        ) -> Result<DefinitionInfoAndBoundSpan> {
            let mut result = FixedDefinitionResolver::default().resolve_definition(context, file_name, position)?;
            result.definitions[0].text_span.start = position;
            Ok(result)
        }
    }

    struct Upper;

    impl ContentSynthesizer for Upper {
        fn synthesize(&self, path: &str) -> Result<ScriptSnapshot> {
            Ok(ScriptSnapshot::from_string(path.to_uppercase()))
        }
    }

    #[test]
    fn test_capabilities_are_swappable() {
        let logger = Arc::new(RecordingLogger::default());
        let storage = FakeStorage::default();
        storage.add("/p/a.tzen");

        let plugin = TzenPlugin::builder(factory())
            .storage(storage)
            .synthesizer(Upper)
            .definition_resolver(EchoResolver)
            .build();
        let instance = plugin.create(PluginCreateInfo {
            project: project(logger, &[]),
            language_service_host: Arc::new(RecordingHost::default()),
            config: serde_json::Value::Null,
        })
        .unwrap();

        assert_eq!(instance.host.get_script_snapshot("/p/a.tzen").unwrap().unwrap().text(), "/P/A.TZEN");
        let definition = instance.service.get_definition_and_bound_span("a.ts", 12).unwrap().unwrap();
        assert_eq!(definition.definitions[0].text_span.start, 12);
    }

    fn create_with_entry(plugin: &TzenPlugin, entry: serde_json::Value) -> Result<PluginInstance> {
        plugin.create(PluginCreateInfo {
            project: project(Arc::new(RecordingLogger::default()), &[]),
            language_service_host: Arc::new(RecordingHost::default()),
            config: entry,
        })
    }

    #[test]
    fn test_plugin_entry_moves_definition_target() {
        let plugin = TzenPlugin::new(factory());
        let entry = serde_json::json!({ "name": "tzen-bridge", "definitionFile": "defs/root.tzen" });
        let instance = create_with_entry(&plugin, entry).unwrap();

        let definition = instance.service.get_definition_and_bound_span("", 0).unwrap().unwrap();
        assert_eq!(definition.definitions[0].file_name, "/proj/defs/root.tzen");
    }

    #[test]
    fn test_plugin_entry_keeps_unmentioned_capabilities() {
        let storage = FakeStorage::default();
        storage.add("/p/a.tzen");
        let plugin = TzenPlugin::builder(factory()).storage(storage).synthesizer(Upper).build();

        let entry = serde_json::json!({ "name": "tzen-bridge", "definitionFile": "b.tzen" });
        let instance = create_with_entry(&plugin, entry).unwrap();
        assert_eq!(instance.host.get_script_snapshot("/p/a.tzen").unwrap().unwrap().text(), "/P/A.TZEN");

        // a second project without an entry keeps the built-in target
        let plain = create_with_entry(&plugin, serde_json::Value::Null).unwrap();
        let definition = plain.service.get_definition_and_bound_span("", 0).unwrap().unwrap();
        assert_eq!(definition.definitions[0].file_name, "/proj/a.tzen");
    }

    #[test]
    fn test_malformed_plugin_entry_fails_create() {
        let plugin = TzenPlugin::new(factory());
        let entry = serde_json::json!({ "definitionFile": ["not", "a", "path"] });
        assert!(matches!(create_with_entry(&plugin, entry), Err(Error::Config(_))));
    }
}
