//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use kotlinit_core::application::ports::Filesystem;
use kotlinit_core::error::KotlinitResult;

/// In-memory filesystem for testing.
///
/// Clones share the same backing store, so a test can keep one handle for
/// assertions while the generator owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    executables: HashSet<PathBuf>,
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

    /// Check if a path exists as a file or directory.
    pub fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    /// Check if a file is marked executable.
    pub fn is_executable(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.executables.contains(path)
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Number of files written.
    pub fn file_count(&self) -> usize {
        let inner = self.inner.read().unwrap();
        inner.files.len()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> KotlinitResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> KotlinitResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        // Mirrors a real filesystem: the parent must exist before a write.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(kotlinit_core::application::ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    operation: "write file",
                    reason: "parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn set_executable(&self, path: &Path) -> KotlinitResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        if !inner.files.contains_key(path) {
            return Err(kotlinit_core::application::ApplicationError::Filesystem {
                path: path.to_path_buf(),
                operation: "set permissions",
                reason: "no such file".into(),
            }
            .into());
        }

        inner.executables.insert(path.to_path_buf());
        Ok(())
    }
}

fn lock_error(path: &Path) -> kotlinit_core::error::KotlinitError {
    kotlinit_core::application::ApplicationError::Filesystem {
        path: path.to_path_buf(),
        operation: "lock filesystem",
        reason: "filesystem lock poisoned".into(),
    }
    .into()
}
