use std::path::Path;

use crate::Result;

/// Reports the files modified or created by the most recent commit.
pub trait DiffSource: Send + Sync {
    /// Repository-relative paths with forward slashes, in the order the diff
    /// reports them. Deleted files are not included.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened, `HEAD` has no
    /// parent commit, or the diff fails.
    fn changed_files(&self, repo_root: &Path) -> Result<Vec<String>>;
}
