//! Host model
//!
//! The traits and data types describing the code-intelligence host the
//! plugin plugs into. Nothing in here knows about `.tzen`.

pub mod traits;
pub mod types;

pub use traits::{
    DiskStorage, HostLogger, LanguageService, LanguageServiceFactory, LanguageServiceHost, Project,
    Storage, TracingLogger,
};
pub use types::{
    DefinitionInfo, DefinitionInfoAndBoundSpan, Extension, ModuleNameLiteral, ModuleResolution,
    QuickInfo, ResolutionOptions, ResolvedModule, ScriptElementKind, ScriptKind, ScriptSnapshot,
    TextSpan,
};
