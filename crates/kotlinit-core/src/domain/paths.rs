//! Path planner: turns a project spec into the directory skeleton of a
//! Kotlin Gradle project.
//!
//! Pure path arithmetic — no error conditions, no filesystem access. The
//! planner is recomputed per generation run; nothing here is cached state.

use std::path::{Path, PathBuf};

use crate::domain::artifact::RelativePath;
use crate::domain::spec::ProjectSpec;

/// Directory name of the source language under `src/main` and `src/test`.
pub const SOURCE_LANGUAGE_DIR: &str = "kotlin";

/// The derived directory plan for one project.
///
/// The four sub-roots are stored relative to `project_root` so that template
/// rendering can compose artifact paths without re-deriving them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    project_root: PathBuf,
    source_package_dir: RelativePath,
    test_package_dir: RelativePath,
    wrapper_dir: RelativePath,
    editor_config_dir: RelativePath,
}

impl ProjectPaths {
    /// Derive all target paths from a spec.
    ///
    /// `source_package_dir` and `test_package_dir` nest one directory per
    /// package segment: `com.example` becomes `src/main/kotlin/com/example`.
    pub fn derive(spec: &ProjectSpec) -> Self {
        let mut source = PathBuf::from("src/main").join(SOURCE_LANGUAGE_DIR);
        let mut test = PathBuf::from("src/test").join(SOURCE_LANGUAGE_DIR);
        for segment in spec.package_name().segments() {
            source.push(segment);
            test.push(segment);
        }

        Self {
            project_root: spec.project_root(),
            source_package_dir: RelativePath::new(source),
            test_package_dir: RelativePath::new(test),
            wrapper_dir: RelativePath::new("gradle/wrapper"),
            editor_config_dir: RelativePath::new(".vscode"),
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn source_package_dir(&self) -> &RelativePath {
        &self.source_package_dir
    }

    pub fn test_package_dir(&self) -> &RelativePath {
        &self.test_package_dir
    }

    pub fn wrapper_dir(&self) -> &RelativePath {
        &self.wrapper_dir
    }

    pub fn editor_config_dir(&self) -> &RelativePath {
        &self.editor_config_dir
    }

    /// Absolute form of a sub-root.
    pub fn absolute(&self, dir: &RelativePath) -> PathBuf {
        self.project_root.join(dir)
    }

    /// Every directory the generator must create, absolute, root first.
    pub fn directories(&self) -> Vec<PathBuf> {
        vec![
            self.project_root.clone(),
            self.absolute(&self.source_package_dir),
            self.absolute(&self.test_package_dir),
            self.absolute(&self.wrapper_dir),
            self.absolute(&self.editor_config_dir),
        ]
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> ProjectSpec {
        ProjectSpec::new(
            "/tmp/ws",
            "demo-app".parse().unwrap(),
            "com.example".parse().unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn derive_is_pure_and_deterministic() {
        let spec = spec();
        assert_eq!(ProjectPaths::derive(&spec), ProjectPaths::derive(&spec));
    }

    #[test]
    fn source_dir_nests_package_segments() {
        let paths = ProjectPaths::derive(&spec());
        assert!(
            paths
                .source_package_dir()
                .as_path()
                .ends_with("src/main/kotlin/com/example")
        );
        assert!(
            paths
                .test_package_dir()
                .as_path()
                .ends_with("src/test/kotlin/com/example")
        );
    }

    #[test]
    fn fixed_sub_roots() {
        let paths = ProjectPaths::derive(&spec());
        assert_eq!(paths.wrapper_dir().as_path(), Path::new("gradle/wrapper"));
        assert_eq!(paths.editor_config_dir().as_path(), Path::new(".vscode"));
    }

    #[test]
    fn directories_are_absolute_and_rooted() {
        let paths = ProjectPaths::derive(&spec());
        let dirs = paths.directories();
        assert_eq!(dirs.len(), 5);
        assert_eq!(dirs[0], PathBuf::from("/tmp/ws/demo-app"));
        for dir in &dirs {
            assert!(dir.is_absolute());
            assert!(dir.starts_with("/tmp/ws/demo-app"));
        }
    }

    #[test]
    fn single_segment_package() {
        let spec = ProjectSpec::new(
            "/tmp/ws",
            "demo".parse().unwrap(),
            "app".parse().unwrap(),
        )
        .unwrap();
        let paths = ProjectPaths::derive(&spec);
        assert_eq!(
            paths.source_package_dir().as_path(),
            Path::new("src/main/kotlin/app")
        );
    }
}
