use std::path::Path;
use std::process::{Command, Output};

use scenario_git::GitError;
use tracing::debug;

use crate::Result;
use crate::error::OperationError;
use crate::traits::DiffSource;

// Without `-z` git C-quotes names containing `"`, `\` or control characters.
const DIFF_ARGS: &[&str] = &["diff", "--name-only", "-z", "--diff-filter=d", "HEAD^"];

/// Shells out to the `git` executable, for environments where the CLI's
/// configuration (for example `diff.renames`) should be honored exactly.
pub struct GitCommandDiffSource {
    program: String,
}

impl GitCommandDiffSource {
    #[must_use]
    pub fn new() -> Self {
        Self {
            program: "git".to_string(),
        }
    }

    #[must_use]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn describe(&self, args: &[&str]) -> String {
        format!("{} {}", self.program, args.join(" "))
    }

    fn run(&self, repo_root: &Path, args: &[&str]) -> Result<Output> {
        Command::new(&self.program)
            .args(args)
            .current_dir(repo_root)
            .output()
            .map_err(|source| OperationError::DiffCommand {
                command: self.describe(args),
                source,
            })
    }

    fn ensure_parent_commit(&self, repo_root: &Path) -> Result<()> {
        let probe = self.run(repo_root, &["rev-parse", "--verify", "--quiet", "HEAD^"])?;
        if probe.status.success() {
            return Ok(());
        }

        let inside = self.run(repo_root, &["rev-parse", "--git-dir"])?;
        if inside.status.success() {
            Err(GitError::NoParentCommit.into())
        } else {
            Err(GitError::NotARepository {
                path: repo_root.to_path_buf(),
            }
            .into())
        }
    }
}

impl Default for GitCommandDiffSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffSource for GitCommandDiffSource {
    fn changed_files(&self, repo_root: &Path) -> Result<Vec<String>> {
        self.ensure_parent_commit(repo_root)?;

        let output = self.run(repo_root, DIFF_ARGS)?;
        if !output.status.success() {
            return Err(OperationError::DiffCommandFailed {
                command: self.describe(DIFF_ARGS),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout =
            String::from_utf8(output.stdout).map_err(|source| OperationError::DiffOutputNotUtf8 {
                command: self.describe(DIFF_ARGS),
                source,
            })?;

        let files = parse_name_only(&stdout);
        debug!(count = files.len(), "parsed `git diff --name-only` output");
        Ok(files)
    }
}

fn parse_name_only(stdout: &str) -> Vec<String> {
    stdout
        .split('\0')
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
