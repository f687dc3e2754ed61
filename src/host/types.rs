//! Data exchanged between the host and the interception layer.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Grammar the host's checker should parse a file as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptKind {
    Unknown,
    Js,
    Jsx,
    /// Typed-superset source; foreign files are presented as this kind
    Ts,
    Tsx,
    External,
    Json,
    Deferred,
}

impl ScriptKind {
    /// Get the string representation of the script kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptKind::Unknown => "unknown",
            ScriptKind::Js => "js",
            ScriptKind::Jsx => "jsx",
            ScriptKind::Ts => "ts",
            ScriptKind::Tsx => "tsx",
            ScriptKind::External => "external",
            ScriptKind::Json => "json",
            ScriptKind::Deferred => "deferred",
        }
    }

    /// Classify a path by its extension, the way a host with no plugins would.
    pub fn from_path(path: &str) -> Self {
        let lower = path.to_ascii_lowercase();
        if lower.ends_with(".tsx") {
            ScriptKind::Tsx
        } else if lower.ends_with(".ts") || lower.ends_with(".mts") || lower.ends_with(".cts") {
            ScriptKind::Ts
        } else if lower.ends_with(".jsx") {
            ScriptKind::Jsx
        } else if lower.ends_with(".js") || lower.ends_with(".mjs") || lower.ends_with(".cjs") {
            ScriptKind::Js
        } else if lower.ends_with(".json") {
            ScriptKind::Json
        } else {
            ScriptKind::Unknown
        }
    }
}

impl std::fmt::Display for ScriptKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// File extension a resolved module is loaded as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Extension {
    #[serde(rename = ".ts")]
    Ts,
    #[serde(rename = ".tsx")]
    Tsx,
    /// Declaration file; foreign modules resolve to this kind
    #[serde(rename = ".d.ts")]
    Dts,
    #[serde(rename = ".js")]
    Js,
    #[serde(rename = ".jsx")]
    Jsx,
    #[serde(rename = ".json")]
    Json,
}

impl Extension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Extension::Ts => ".ts",
            Extension::Tsx => ".tsx",
            Extension::Dts => ".d.ts",
            Extension::Js => ".js",
            Extension::Jsx => ".jsx",
            Extension::Json => ".json",
        }
    }

    /// The extension `path` already carries, checking `.d.ts` before `.ts`.
    pub fn of(path: &str) -> Option<Self> {
        [
            Extension::Dts,
            Extension::Tsx,
            Extension::Ts,
            Extension::Jsx,
            Extension::Js,
            Extension::Json,
        ]
        .into_iter()
        .find(|ext| path.ends_with(ext.as_str()))
    }
}

impl std::fmt::Display for Extension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable text content of a script, as handed to the checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptSnapshot {
    text: Arc<str>,
}

impl ScriptSnapshot {
    pub fn from_string(text: impl Into<Arc<str>>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text between two byte offsets, clamped to the snapshot.
    pub fn get_text(&self, start: usize, end: usize) -> &str {
        let end = end.min(self.text.len());
        let start = start.min(end);
        self.text.get(start..end).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// An import specifier as written in source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleNameLiteral {
    pub text: String,
}

impl ModuleNameLiteral {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A module the host should load for an import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedModule {
    pub resolved_file_name: String,
    pub extension: Extension,
    pub is_external_library_import: bool,
}

/// Outcome of resolving one module name literal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleResolution {
    /// `None` when the import could not be resolved
    pub resolved_module: Option<ResolvedModule>,
    /// Locations tried without success
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed_lookup_locations: Vec<String>,
}

impl ModuleResolution {
    pub fn resolved(module: ResolvedModule) -> Self {
        Self {
            resolved_module: Some(module),
            failed_lookup_locations: Vec::new(),
        }
    }

    pub fn unresolved(failed_lookup_locations: Vec<String>) -> Self {
        Self {
            resolved_module: None,
            failed_lookup_locations,
        }
    }
}

/// Extra inputs the host threads through module resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionOptions {
    /// Extensions tried, in order, for extensionless relative imports
    pub extensions: Vec<Extension>,
}

impl Default for ResolutionOptions {
    fn default() -> Self {
        Self {
            extensions: vec![
                Extension::Ts,
                Extension::Tsx,
                Extension::Dts,
                Extension::Js,
                Extension::Jsx,
            ],
        }
    }
}

/// A range of text, in offsets from the start of a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    pub start: usize,
    pub length: usize,
}

impl TextSpan {
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Kind of the element a definition or quick-info entry points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptElementKind {
    #[default]
    Unknown,
    Module,
    Type,
    Interface,
    Class,
    Function,
    Variable,
}

impl ScriptElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptElementKind::Unknown => "",
            ScriptElementKind::Module => "module",
            ScriptElementKind::Type => "type",
            ScriptElementKind::Interface => "interface",
            ScriptElementKind::Class => "class",
            ScriptElementKind::Function => "function",
            ScriptElementKind::Variable => "var",
        }
    }
}

/// One "go to definition" target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionInfo {
    pub file_name: String,
    pub text_span: TextSpan,
    pub kind: ScriptElementKind,
    pub name: String,
    pub container_kind: ScriptElementKind,
    pub container_name: String,
}

/// Definition targets plus the span of the symbol the request was made on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionInfoAndBoundSpan {
    pub definitions: Vec<DefinitionInfo>,
    pub text_span: TextSpan,
}

/// Hover information for a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickInfo {
    pub kind: ScriptElementKind,
    pub text_span: TextSpan,
    pub display: String,
}
