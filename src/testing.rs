//! In-crate fakes for the host side, recording what the plugin asks of them.

use crate::host::{
    DefinitionInfo, DefinitionInfoAndBoundSpan, Extension, HostLogger, LanguageService,
    LanguageServiceHost, ModuleNameLiteral, ModuleResolution, Project, QuickInfo,
    ResolutionOptions, ResolvedModule, ScriptElementKind, ScriptKind, ScriptSnapshot, Storage,
    TextSpan,
};
use crate::{Error, Result};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct RecordingHost {
    files: Vec<String>,
    snapshots: HashMap<String, String>,
    fail_resolution: bool,
    calls: Mutex<Vec<String>>,
    batches: Mutex<Vec<Vec<String>>>,
}

impl RecordingHost {
    pub fn with_files(mut self, files: &[&str]) -> Self {
        self.files = files.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn with_snapshot(mut self, file: &str, text: &str) -> Self {
        self.snapshots.insert(file.to_string(), text.to_string());
        self
    }

    pub fn failing_resolution(mut self) -> Self {
        self.fail_resolution = true;
        self
    }

    /// Kind and snapshot requests that reached this host
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Every resolution batch that reached this host, as literal texts
    pub fn resolved_batches(&self) -> Vec<Vec<String>> {
        self.batches.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl LanguageServiceHost for RecordingHost {
    fn get_current_directory(&self) -> String {
        "/host".to_string()
    }

    fn get_script_file_names(&self) -> Vec<String> {
        self.files.clone()
    }

    fn get_script_version(&self, file_name: &str) -> String {
        format!("v{}", file_name.len())
    }

    fn get_script_kind(&self, file_name: &str) -> ScriptKind {
        self.record(format!("kind {}", file_name));
        ScriptKind::from_path(file_name)
    }

    fn get_script_snapshot(&self, file_name: &str) -> Result<Option<ScriptSnapshot>> {
        self.record(format!("snapshot {}", file_name));
        Ok(self
            .snapshots
            .get(file_name)
            .map(|text| ScriptSnapshot::from_string(text.as_str())))
    }

    fn resolve_module_name_literals(
        &self,
        literals: &[ModuleNameLiteral],
        containing_file: &str,
        _options: &ResolutionOptions,
    ) -> Result<Vec<ModuleResolution>> {
        self.batches
            .lock()
            .unwrap()
            .push(literals.iter().map(|l| l.text.clone()).collect());

        if self.fail_resolution {
            return Err(Error::Host(format!("cannot resolve imports of {}", containing_file)));
        }

        Ok(literals
            .iter()
            .map(|literal| {
                if literal.text.starts_with('.') {
                    ModuleResolution::resolved(ResolvedModule {
                        resolved_file_name: format!("/host/{}.ts", literal.text),
                        extension: Extension::Ts,
                        is_external_library_import: false,
                    })
                } else {
                    ModuleResolution::unresolved(vec![format!("/host/node_modules/{}", literal.text)])
                }
            })
            .collect())
    }

    fn file_exists(&self, path: &str) -> bool {
        self.files.iter().any(|f| f == path) || self.snapshots.contains_key(path)
    }

    fn read_file(&self, path: &str) -> Result<Option<String>> {
        Ok(self.snapshots.get(path).cloned())
    }
}

/// Service that answers from whatever provider it was built over.
pub struct FakeService {
    host: Arc<dyn LanguageServiceHost>,
    calls: Mutex<Vec<String>>,
}

impl FakeService {
    pub fn new(host: Arc<dyn LanguageServiceHost>) -> Self {
        Self {
            host,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl LanguageService for FakeService {
    fn get_definition_and_bound_span(
        &self,
        file_name: &str,
        position: usize,
    ) -> Result<Option<DefinitionInfoAndBoundSpan>> {
        self.calls.lock().unwrap().push(format!("definition {}:{}", file_name, position));
        Ok(Some(DefinitionInfoAndBoundSpan {
            definitions: vec![DefinitionInfo {
                file_name: file_name.to_string(),
                text_span: TextSpan::new(position, 1),
                kind: ScriptElementKind::Variable,
                name: "host".to_string(),
                container_kind: ScriptElementKind::Module,
                container_name: String::new(),
            }],
            text_span: TextSpan::new(position, 1),
        }))
    }

    fn get_quick_info_at_position(&self, file_name: &str, position: usize) -> Result<Option<QuickInfo>> {
        self.calls.lock().unwrap().push(format!("quickinfo {}:{}", file_name, position));
        Ok(Some(QuickInfo {
            kind: ScriptElementKind::Variable,
            text_span: TextSpan::new(position, 1),
            display: format!("{} @ {}", file_name, position),
        }))
    }

    fn get_program_file_names(&self) -> Result<Vec<String>> {
        self.calls.lock().unwrap().push("program".to_string());
        Ok(self.host.get_script_file_names())
    }
}

#[derive(Default)]
pub struct RecordingLogger {
    lines: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl HostLogger for RecordingLogger {
    fn info(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }
}

pub struct FakeProject {
    name: String,
    files: Mutex<Vec<String>>,
    logger: Arc<RecordingLogger>,
}

impl FakeProject {
    pub fn new(name: &str, files: &[&str], logger: Arc<RecordingLogger>) -> Self {
        Self {
            name: name.to_string(),
            files: Mutex::new(files.iter().map(|f| f.to_string()).collect()),
            logger,
        }
    }

    pub fn add_file(&self, file: &str) {
        self.files.lock().unwrap().push(file.to_string());
    }
}

impl Project for FakeProject {
    fn project_name(&self) -> String {
        self.name.clone()
    }

    fn file_names(&self) -> Vec<String> {
        self.files.lock().unwrap().clone()
    }

    fn logger(&self) -> Arc<dyn HostLogger> {
        self.logger.clone()
    }
}

/// Storage with an explicit set of existing paths.
#[derive(Default)]
pub struct FakeStorage {
    existing: Mutex<HashSet<String>>,
    failing: bool,
    checks: AtomicUsize,
}

impl FakeStorage {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn add(&self, path: &str) {
        self.existing.lock().unwrap().insert(path.to_string());
    }

    /// Number of existence checks performed so far
    pub fn checks(&self) -> usize {
        self.checks.load(Ordering::SeqCst)
    }
}

impl Storage for FakeStorage {
    fn exists(&self, path: &str) -> std::io::Result<bool> {
        self.checks.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(std::io::Error::other("storage offline"));
        }
        Ok(self.existing.lock().unwrap().contains(path))
    }
}
