//! Module resolution override
//!
//! Foreign import specifiers are redirected to a declaration module sitting
//! next to the importing file. Everything else keeps whatever the host
//! resolved it to.

use crate::extension::is_foreign;
use crate::host::{Extension, ModuleNameLiteral, ModuleResolution, ResolvedModule};
use crate::{Error, Result};
use std::path::{Component, Path, PathBuf};

/// Join `relative` onto `base` and fold `.`/`..` lexically.
///
/// An absolute `relative` replaces `base`. Nothing is looked up on storage,
/// so the result need not exist.
pub fn resolve_path(base: &Path, relative: &str) -> String {
    let mut out = PathBuf::new();
    for component in base.join(relative).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }

    if out.as_os_str().is_empty() {
        return ".".to_string();
    }
    out.to_string_lossy().into_owned()
}

/// Directory part of `file`, empty for a bare file name.
fn dirname(file: &str) -> &Path {
    Path::new(file).parent().unwrap_or_else(|| Path::new(""))
}

/// The module a foreign `literal` imported from `containing_file` resolves to.
pub fn resolve_foreign_module(literal: &ModuleNameLiteral, containing_file: &str) -> ResolvedModule {
    ResolvedModule {
        resolved_file_name: resolve_path(dirname(containing_file), &literal.text),
        extension: Extension::Dts,
        is_external_library_import: false,
    }
}

/// Overwrite the foreign slots of the host's resolution batch.
///
/// `defaults` is what the host produced for `literals`. Slots whose literal
/// is not foreign are returned untouched.
///
/// A host batch whose length differs from `literals` is rejected with
/// [`Error::ResolutionMismatch`] instead of being patched slot by slot, so
/// a misbehaving host surfaces as an error rather than as imports silently
/// paired with another literal's resolution.
pub fn override_foreign_resolutions(
    literals: &[ModuleNameLiteral],
    containing_file: &str,
    defaults: Vec<ModuleResolution>,
) -> Result<Vec<ModuleResolution>> {
    if defaults.len() != literals.len() {
        return Err(Error::ResolutionMismatch {
            expected: literals.len(),
            actual: defaults.len(),
        });
    }

    Ok(literals
        .iter()
        .zip(defaults)
        .map(|(literal, default)| {
            if is_foreign(&literal.text) {
                ModuleResolution::resolved(resolve_foreign_module(literal, containing_file))
            } else {
                default
            }
        })
        .collect())
}
