use std::path::PathBuf;

use crate::{FileChange, FileStatus, GitError, Result};

use super::Repository;

impl Repository {
    /// Files that differ between the parent of `HEAD` and the working tree.
    ///
    /// Equivalent to `git diff --name-status HEAD^`: changes committed in `HEAD`,
    /// staged changes and unstaged modifications are all reported, untracked
    /// files are not. Deltas are ordered by path.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::NoParentCommit`] if `HEAD` is unborn or is a root commit.
    pub fn changed_files_since_parent(&self) -> Result<Vec<FileChange>> {
        let head = match self.inner.head() {
            Ok(head) => head,
            Err(e)
                if matches!(
                    e.code(),
                    git2::ErrorCode::UnbornBranch | git2::ErrorCode::NotFound
                ) =>
            {
                return Err(GitError::NoParentCommit);
            }
            Err(e) => return Err(e.into()),
        };

        let head_commit = head.peel_to_commit()?;
        if head_commit.parent_count() == 0 {
            return Err(GitError::NoParentCommit);
        }
        let parent_tree = head_commit.parent(0)?.tree()?;

        let mut diff = self
            .inner
            .diff_tree_to_workdir_with_index(Some(&parent_tree), None)?;

        let mut find_opts = git2::DiffFindOptions::new();
        find_opts.renames(true);
        find_opts.copies(true);
        diff.find_similar(Some(&mut find_opts))?;

        let mut changes = Vec::new();

        for delta in diff.deltas() {
            let status = match delta.status() {
                git2::Delta::Added => FileStatus::Added,
                git2::Delta::Deleted => FileStatus::Deleted,
                git2::Delta::Modified => FileStatus::Modified,
                git2::Delta::Renamed => FileStatus::Renamed,
                git2::Delta::Copied => FileStatus::Copied,
                git2::Delta::Typechange => FileStatus::TypeChanged,
                _ => continue,
            };

            let path = delta
                .new_file()
                .path()
                .or_else(|| delta.old_file().path())
                .map(PathBuf::from)
                .ok_or(GitError::MissingDeltaPath)?;

            let mut change = FileChange::new(path, status);

            if status == FileStatus::Renamed || status == FileStatus::Copied {
                if let Some(old_path) = delta.old_file().path() {
                    change = change.with_old_path(old_path.to_path_buf());
                }
            }

            changes.push(change);
        }

        Ok(changes)
    }
}
