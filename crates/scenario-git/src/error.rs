use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("git operation failed")]
    Git(#[from] git2::Error),

    #[error("not a git repository: '{path}'")]
    NotARepository { path: PathBuf },

    #[error("HEAD has no parent commit to diff against (fresh repository or shallow clone?)")]
    NoParentCommit,

    #[error("repository has no working directory: '{path}'")]
    BareRepository { path: PathBuf },

    #[error("diff delta has no file path")]
    MissingDeltaPath,
}
