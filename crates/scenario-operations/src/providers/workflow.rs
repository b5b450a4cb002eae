use std::io::Write;
use std::path::Path;

use scenario_workflow::{TestConfiguration, serialize_workflow};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::Result;
use crate::error::OperationError;
use crate::traits::WorkflowWriter;

/// Writes the workflow through a temporary file in the destination directory
/// that is renamed over the target once fully written.
pub struct FileSystemWorkflowWriter;

impl FileSystemWorkflowWriter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemWorkflowWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowWriter for FileSystemWorkflowWriter {
    fn write_workflow(&self, path: &Path, config: &TestConfiguration) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        if !dir.is_dir() {
            return Err(OperationError::OutputDirectoryMissing {
                path: dir.to_path_buf(),
            });
        }

        let content = serialize_workflow(config)?;

        let write_err = |source| OperationError::WorkflowWrite {
            path: path.to_path_buf(),
            source,
        };

        let mut temp_file = NamedTempFile::new_in(dir).map_err(write_err)?;
        temp_file.write_all(content.as_bytes()).map_err(write_err)?;
        temp_file.as_file().sync_all().map_err(write_err)?;
        make_world_readable(temp_file.as_file()).map_err(write_err)?;
        temp_file
            .persist(path)
            .map_err(|e| write_err(e.error))?;

        debug!(
            path = %path.display(),
            scenarios = config.len(),
            "wrote workflow file"
        );

        Ok(())
    }
}

// Temporary files are created 0600; the runner may read the workflow as another user.
#[cfg(unix)]
fn make_world_readable(file: &std::fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    file.set_permissions(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn make_world_readable(_file: &std::fs::File) -> std::io::Result<()> {
    Ok(())
}
