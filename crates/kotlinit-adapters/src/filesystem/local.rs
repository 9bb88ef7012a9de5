//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use kotlinit_core::{application::ports::Filesystem, error::KotlinitResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> KotlinitResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> KotlinitResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn set_executable(&self, path: &Path) -> KotlinitResult<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata =
                std::fs::metadata(path).map_err(|e| map_io_error(path, e, "get metadata"))?;
            let mut perms = metadata.permissions();
            let mode = perms.mode();
            perms.set_mode(mode | 0o111);
            std::fs::set_permissions(path, perms)
                .map_err(|e| map_io_error(path, e, "set permissions"))?;
        }
        #[cfg(not(unix))]
        {
            // No execute bit outside the POSIX permission model.
            let _ = path;
        }
        Ok(())
    }
}

fn map_io_error(
    path: &Path,
    e: io::Error,
    operation: &'static str,
) -> kotlinit_core::error::KotlinitError {
    use kotlinit_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        operation,
        reason: e.to_string(),
    }
    .into()
}
