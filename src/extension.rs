//! Foreign-format classification.
//!
//! A path is foreign iff it ends with [`FOREIGN_EXTENSION`]. The check is a
//! plain, case-sensitive suffix match on the string as given: no
//! canonicalization, no lookup of what the path points at.

/// Suffix marking a `.tzen` source file.
pub const FOREIGN_EXTENSION: &str = ".tzen";

/// Returns `true` when `path` names a foreign-format file.
pub fn is_foreign(path: &str) -> bool {
    path.ends_with(FOREIGN_EXTENSION)
}
