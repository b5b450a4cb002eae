use std::path::PathBuf;
use std::process::ExitStatus;
use std::string::FromUtf8Error;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Git(#[from] scenario_git::GitError),

    #[error(transparent)]
    Workflow(#[from] scenario_workflow::WorkflowError),

    #[error("failed to run `{command}`")]
    DiffCommand {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed with {status}: {stderr}")]
    DiffCommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("`{command}` produced output that is not valid UTF-8")]
    DiffOutputNotUtf8 {
        command: String,
        #[source]
        source: FromUtf8Error,
    },

    #[error("output directory '{path}' does not exist")]
    OutputDirectoryMissing { path: PathBuf },

    #[error("failed to write workflow file '{path}'")]
    WorkflowWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl OperationError {
    /// Whether the changed file list could not be obtained.
    #[must_use]
    pub fn is_diff_error(&self) -> bool {
        matches!(
            self,
            Self::Git(_)
                | Self::DiffCommand { .. }
                | Self::DiffCommandFailed { .. }
                | Self::DiffOutputNotUtf8 { .. }
        )
    }

    /// Whether the workflow file could not be written.
    #[must_use]
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            Self::OutputDirectoryMissing { .. } | Self::WorkflowWrite { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, OperationError>;
