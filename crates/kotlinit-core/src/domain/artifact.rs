//! File artifacts and the project layout produced by template rendering.

use std::collections::HashSet;
use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::domain::error::DomainError;

// ── RelativePath ──────────────────────────────────────────────────────────────

/// A filesystem path guaranteed to stay inside the project root.
///
/// Invariant: never absolute, never contains `..`. Enforced at construction,
/// which makes "generation must never write outside `target_dir/project_name`"
/// a structural property rather than a runtime check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Create a new relative path.
    ///
    /// # Panics
    /// Panics if the path is absolute or escapes upward (use `try_new` for
    /// fallible construction).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::try_new(path).expect("path must be relative and must not contain '..'")
    }

    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_absolute() {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            });
        }
        if path.components().any(|c| c == Component::ParentDir) {
            return Err(DomainError::ParentDirNotAllowed {
                path: path.display().to_string(),
            });
        }
        Ok(Self(path))
    }

    /// Join a segment, maintaining the invariant.
    pub fn join(&self, segment: impl AsRef<Path>) -> Result<Self, DomainError> {
        Self::try_new(self.0.join(segment))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<&str> for RelativePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

// ── FileArtifact ──────────────────────────────────────────────────────────────

/// One file to be written: path under the project root, content, and whether
/// the file needs its execute bits set after writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileArtifact {
    path: RelativePath,
    content: String,
    executable: bool,
}

impl FileArtifact {
    pub fn new(path: RelativePath, content: impl Into<String>) -> Self {
        Self {
            path,
            content: content.into(),
            executable: false,
        }
    }

    /// A file artifact that must be marked executable after writing
    /// (launcher scripts).
    pub fn executable(path: RelativePath, content: impl Into<String>) -> Self {
        Self {
            path,
            content: content.into(),
            executable: true,
        }
    }

    pub fn path(&self) -> &RelativePath {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_executable(&self) -> bool {
        self.executable
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

// ── ProjectLayout ─────────────────────────────────────────────────────────────

/// The complete set of file artifacts rendered for one project spec.
///
/// Output of template rendering, input to the generator's write phase.
/// Contains no behavior beyond validation; directory creation is driven by
/// the path planner, not by this type.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
    files: Vec<FileArtifact>,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: Vec::new(),
        }
    }

    pub fn add_file(&mut self, file: FileArtifact) {
        self.files.push(file);
    }

    pub fn with_file(mut self, file: FileArtifact) -> Self {
        self.add_file(file);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> &[FileArtifact] {
        &self.files
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::EmptyLayout);
        }

        let mut seen = HashSet::new();
        for file in &self.files {
            if !seen.insert(file.path().as_path()) {
                return Err(DomainError::DuplicatePath {
                    path: file.path().to_string(),
                });
            }
        }

        Ok(())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
