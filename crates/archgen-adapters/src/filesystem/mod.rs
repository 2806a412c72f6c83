//! Filesystem adapters.

pub mod local;
pub mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;

use std::path::Path;

use archgen_core::{application::ApplicationError, error::ArchgenResult};

/// Derive the namespace root from a project directory path: the folder's
/// base name up to its first `.` (`/out/Acme.Core` → `Acme`).
///
/// Shared by both filesystem adapters so production and tests agree on the
/// edge cases. A folder name without a `.` is an explicit error — the
/// namespace of a generated file would otherwise be undefined.
pub(crate) fn derive_namespace_root(project_dir: &Path) -> ArchgenResult<String> {
    let name = project_dir
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ApplicationError::NamespaceDerivation {
            path: project_dir.to_path_buf(),
            reason: "path has no folder name".into(),
        })?;

    match name.split_once('.') {
        Some((root, _)) if !root.is_empty() => Ok(root.to_string()),
        _ => Err(ApplicationError::NamespaceDerivation {
            path: project_dir.to_path_buf(),
            reason: "folder name contains no '.' separator".into(),
        }
        .into()),
    }
}
