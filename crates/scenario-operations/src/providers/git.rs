use std::path::Path;

use scenario_git::{FileChange, Repository};
use tracing::debug;

use crate::Result;
use crate::traits::DiffSource;

/// Diffs the working tree against `HEAD^` through libgit2.
pub struct Git2DiffSource;

impl Git2DiffSource {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Git2DiffSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffSource for Git2DiffSource {
    fn changed_files(&self, repo_root: &Path) -> Result<Vec<String>> {
        let repo = Repository::open(repo_root)?;
        let changes = repo.changed_files_since_parent()?;

        debug!(
            root = %repo.root().display(),
            count = changes.len(),
            "computed diff against HEAD^"
        );

        Ok(changes
            .into_iter()
            .filter_map(|change| {
                log_change(&change);
                change
                    .status
                    .is_present()
                    .then(|| change.path.to_string_lossy().into_owned())
            })
            .collect())
    }
}

fn log_change(change: &FileChange) {
    match &change.old_path {
        Some(old_path) => debug!(
            status = ?change.status,
            path = %change.path.display(),
            from = %old_path.display(),
            "changed file"
        ),
        None => debug!(
            status = ?change.status,
            path = %change.path.display(),
            "changed file"
        ),
    }
}
