//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use archgen_core::{application::ports::Filesystem, error::ArchgenResult};

/// In-memory filesystem for testing.
///
/// Keeps the parent-must-exist rule for writes so tests prove the
/// orchestrator creates scaffold directories before writing boilerplate.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files, sorted (testing helper).
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// List files under a directory, sorted (testing helper).
    pub fn files_under(&self, dir: &Path) -> Vec<PathBuf> {
        self.list_files()
            .into_iter()
            .filter(|p| p.starts_with(dir))
            .collect()
    }
}

impl Filesystem for MemoryFilesystem {
    fn directory_exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.directories.contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> ArchgenResult<()> {
        let mut inner = self.inner.write().unwrap();

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ArchgenResult<()> {
        let mut inner = self.inner.write().unwrap();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(archgen_core::application::ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn namespace_root(&self, project_dir: &Path) -> ArchgenResult<String> {
        super::derive_namespace_root(project_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_registers_ancestors() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/a/b/c")).unwrap();
        assert!(fs.directory_exists(Path::new("/a")));
        assert!(fs.directory_exists(Path::new("/a/b")));
        assert!(fs.directory_exists(Path::new("/a/b/c")));
    }

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/a/file.cs"), "x").is_err());

        fs.create_dir_all(Path::new("/a")).unwrap();
        fs.write_file(Path::new("/a/file.cs"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("/a/file.cs")).unwrap(), "x");
    }

    #[test]
    fn same_path_write_overwrites() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/a")).unwrap();
        fs.write_file(Path::new("/a/f"), "one").unwrap();
        fs.write_file(Path::new("/a/f"), "two").unwrap();
        assert_eq!(fs.read_file(Path::new("/a/f")).unwrap(), "two");
        assert_eq!(fs.list_files().len(), 1);
    }

    #[test]
    fn files_under_filters_by_prefix() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/x/One.Core")).unwrap();
        fs.create_dir_all(Path::new("/x/One.API")).unwrap();
        fs.write_file(Path::new("/x/One.Core/a.cs"), "").unwrap();
        fs.write_file(Path::new("/x/One.API/b.cs"), "").unwrap();

        assert_eq!(fs.files_under(Path::new("/x/One.Core")).len(), 1);
        assert_eq!(fs.files_under(Path::new("/x")).len(), 2);
    }
}
