//! Generator service - the composition root of one scaffolding run.
//!
//! Orchestrates the path planner, the template renderer, and the filesystem
//! port:
//! 1. Derive target paths from the spec
//! 2. Create every required directory (create-if-absent, recursive)
//! 3. Render and write every file artifact, overwriting existing files
//! 4. Set execute bits on launcher scripts after writing them
//!
//! There are no retries and no rollback: the first I/O failure aborts the run
//! and already-written entries are left in place. Cleanup, if desired, is the
//! caller's policy.

use tracing::{info, instrument};

use crate::{
    application::ports::{Filesystem, TemplateRenderer},
    domain::{ProjectPaths, ProjectSpec},
    error::{KotlinitError, KotlinitResult},
};

/// Main project generation service.
pub struct GeneratorService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl GeneratorService {
    /// Create a new generator service with the given adapters.
    pub fn new(renderer: Box<dyn TemplateRenderer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            renderer,
            filesystem,
        }
    }

    /// Generate a complete project tree for the spec.
    ///
    /// Idempotent with respect to directories: re-running with the same spec
    /// never fails on pre-existing directories, it only resets file contents.
    #[instrument(
        skip_all,
        fields(
            project = %spec.project_name(),
            package = %spec.package_name(),
            root = %spec.project_root().display(),
        )
    )]
    pub fn generate(&self, spec: &ProjectSpec) -> KotlinitResult<()> {
        // 1. Plan
        let paths = ProjectPaths::derive(spec);

        // 2. Directory skeleton
        for dir in paths.directories() {
            self.filesystem.create_dir_all(&dir)?;
        }

        // 3. Render + validate
        let layout = self.renderer.render(spec, &paths)?;
        layout.validate().map_err(KotlinitError::Domain)?;

        // 4. Write
        for file in layout.files() {
            let path = layout.root().join(file.path());
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, file.content())?;
            if file.is_executable() {
                self.filesystem.set_executable(&path)?;
            }
        }

        info!(files = layout.files().len(), "project generated");
        Ok(())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;
    use crate::application::ports::{MockFilesystem, MockTemplateRenderer};
    use crate::domain::{FileArtifact, ProjectLayout};

    fn spec() -> ProjectSpec {
        ProjectSpec::new(
            "/tmp/ws",
            "demo-app".parse().unwrap(),
            "com.example".parse().unwrap(),
        )
        .unwrap()
    }

    fn renderer_with(files: Vec<FileArtifact>) -> MockTemplateRenderer {
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().returning(move |_, paths| {
            let mut layout = ProjectLayout::new(paths.project_root());
            for file in &files {
                layout.add_file(file.clone());
            }
            Ok(layout)
        });
        renderer
    }

    #[test]
    fn generate_creates_every_planned_directory() {
        let renderer = renderer_with(vec![FileArtifact::new("settings.gradle.kts".into(), "")]);

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all()
            .withf(|p: &Path| p.starts_with("/tmp/ws/demo-app"))
            .returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));

        let service = GeneratorService::new(Box::new(renderer), Box::new(fs));
        service.generate(&spec()).unwrap();
    }

    #[test]
    fn generate_writes_files_under_project_root() {
        let renderer = renderer_with(vec![
            FileArtifact::new("build.gradle.kts".into(), "plugins {}\n"),
            FileArtifact::new("gradle/wrapper/gradle-wrapper.properties".into(), "k=v\n"),
        ]);

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|p: &Path, _| p.starts_with("/tmp/ws/demo-app"))
            .times(2)
            .returning(|_, _| Ok(()));

        let service = GeneratorService::new(Box::new(renderer), Box::new(fs));
        service.generate(&spec()).unwrap();
    }

    #[test]
    fn executable_bit_is_set_after_the_write() {
        let renderer = renderer_with(vec![FileArtifact::executable(
            "gradlew".into(),
            "#!/bin/bash\n",
        )]);

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));
        fs.expect_set_executable()
            .withf(|p: &Path| p == Path::new("/tmp/ws/demo-app/gradlew"))
            .times(1)
            .returning(|_| Ok(()));

        let service = GeneratorService::new(Box::new(renderer), Box::new(fs));
        service.generate(&spec()).unwrap();
    }

    #[test]
    fn non_executable_files_skip_the_permission_call() {
        let renderer = renderer_with(vec![FileArtifact::new("gradlew.bat".into(), "@echo off\n")]);

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs.expect_set_executable().times(0);

        let service = GeneratorService::new(Box::new(renderer), Box::new(fs));
        service.generate(&spec()).unwrap();
    }

    #[test]
    fn write_failure_aborts_without_retry() {
        let renderer = renderer_with(vec![
            FileArtifact::new("build.gradle.kts".into(), ""),
            FileArtifact::new("settings.gradle.kts".into(), ""),
        ]);

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(1).returning(|p: &Path, _| {
            Err(crate::application::ApplicationError::Filesystem {
                path: p.to_path_buf(),
                operation: "write file",
                reason: "disk full".into(),
            }
            .into())
        });

        let service = GeneratorService::new(Box::new(renderer), Box::new(fs));
        let err = service.generate(&spec()).unwrap_err();
        assert!(matches!(err, KotlinitError::Application(_)));
    }

    #[test]
    fn empty_layout_is_rejected_before_any_write() {
        let renderer = renderer_with(vec![]);

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(0);

        let service = GeneratorService::new(Box::new(renderer), Box::new(fs));
        let err = service.generate(&spec()).unwrap_err();
        assert!(matches!(err, KotlinitError::Domain(_)));
    }

    #[test]
    fn directory_creation_failure_propagates() {
        let renderer = MockTemplateRenderer::new();

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|p: &Path| {
            Err(crate::application::ApplicationError::Filesystem {
                path: PathBuf::from(p),
                operation: "create directory",
                reason: "permission denied".into(),
            }
            .into())
        });

        let service = GeneratorService::new(Box::new(renderer), Box::new(fs));
        assert!(service.generate(&spec()).is_err());
    }
}
