use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use scenario_git::GitError;
use scenario_workflow::TestConfiguration;

use crate::Result;
use crate::error::OperationError;
use crate::traits::{DiffSource, WorkflowWriter};

#[derive(Debug, Clone, Copy)]
enum MockDiffFailure {
    NoParentCommit,
    NotARepository,
}

pub struct MockDiffSource {
    files: Vec<String>,
    failure: Option<MockDiffFailure>,
    requested_roots: Mutex<Vec<PathBuf>>,
}

impl MockDiffSource {
    #[must_use]
    pub fn with_files(files: &[&str]) -> Self {
        Self {
            files: files.iter().map(ToString::to_string).collect(),
            failure: None,
            requested_roots: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn without_parent() -> Self {
        Self {
            failure: Some(MockDiffFailure::NoParentCommit),
            ..Self::with_files(&[])
        }
    }

    #[must_use]
    pub fn not_a_repository() -> Self {
        Self {
            failure: Some(MockDiffFailure::NotARepository),
            ..Self::with_files(&[])
        }
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn requested_roots(&self) -> Vec<PathBuf> {
        self.requested_roots.lock().expect("lock poisoned").clone()
    }
}

impl DiffSource for MockDiffSource {
    fn changed_files(&self, repo_root: &Path) -> Result<Vec<String>> {
        self.requested_roots
            .lock()
            .expect("lock poisoned")
            .push(repo_root.to_path_buf());

        match self.failure {
            Some(MockDiffFailure::NoParentCommit) => Err(GitError::NoParentCommit.into()),
            Some(MockDiffFailure::NotARepository) => Err(GitError::NotARepository {
                path: repo_root.to_path_buf(),
            }
            .into()),
            None => Ok(self.files.clone()),
        }
    }
}

impl DiffSource for Arc<MockDiffSource> {
    fn changed_files(&self, repo_root: &Path) -> Result<Vec<String>> {
        (**self).changed_files(repo_root)
    }
}

pub struct MockWorkflowWriter {
    written: Mutex<Vec<(PathBuf, TestConfiguration)>>,
    fail: bool,
}

impl MockWorkflowWriter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            written: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn written(&self) -> Vec<(PathBuf, TestConfiguration)> {
        self.written.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockWorkflowWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowWriter for MockWorkflowWriter {
    fn write_workflow(&self, path: &Path, config: &TestConfiguration) -> Result<()> {
        if self.fail {
            return Err(OperationError::WorkflowWrite {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "mock failure"),
            });
        }

        self.written
            .lock()
            .expect("lock poisoned")
            .push((path.to_path_buf(), config.clone()));
        Ok(())
    }
}

impl WorkflowWriter for Arc<MockWorkflowWriter> {
    fn write_workflow(&self, path: &Path, config: &TestConfiguration) -> Result<()> {
        (**self).write_workflow(path, config)
    }
}
