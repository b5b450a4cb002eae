use std::path::PathBuf;

use scenario_operations::operations::CollectorConfig;

use crate::error::{CliError, Result};

pub(crate) const WORKSPACE_ENV_VAR: &str = "GITHUB_WORKSPACE";

/// Builds the collector configuration from CLI overrides, falling back to the
/// current directory and `GITHUB_WORKSPACE`.
///
/// The workspace is resolved first so a misconfigured CI job fails before git
/// is touched.
pub(crate) fn resolve_config(
    path: Option<PathBuf>,
    workspace: Option<PathBuf>,
) -> Result<CollectorConfig> {
    let workspace_root = match workspace {
        Some(workspace) => workspace,
        None => workspace_from_env()?,
    };

    let repo_root = match path {
        Some(path) => path,
        None => std::env::current_dir().map_err(CliError::CurrentDir)?,
    };

    Ok(CollectorConfig::new(repo_root, workspace_root))
}

fn workspace_from_env() -> Result<PathBuf> {
    match std::env::var_os(WORKSPACE_ENV_VAR) {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => Err(CliError::MissingEnvironment {
            var: WORKSPACE_ENV_VAR,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn with_workspace_env<F, R>(value: Option<&str>, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _guard = ENV_MUTEX.lock().expect("mutex poisoned");
        let old_value = std::env::var_os(WORKSPACE_ENV_VAR);

        match value {
            // SAFETY: Test code runs sequentially with ENV_MUTEX held.
            Some(v) => unsafe { std::env::set_var(WORKSPACE_ENV_VAR, v) },
            // SAFETY: Test code runs sequentially with ENV_MUTEX held.
            None => unsafe { std::env::remove_var(WORKSPACE_ENV_VAR) },
        }

        let result = f();

        match old_value {
            // SAFETY: Test code runs sequentially with ENV_MUTEX held.
            Some(v) => unsafe { std::env::set_var(WORKSPACE_ENV_VAR, v) },
            // SAFETY: Test code runs sequentially with ENV_MUTEX held.
            None => unsafe { std::env::remove_var(WORKSPACE_ENV_VAR) },
        }

        result
    }

    #[test]
    fn reads_workspace_from_environment() {
        with_workspace_env(Some("/github/workspace"), || {
            let config = resolve_config(Some(PathBuf::from("/repo")), None)
                .expect("workspace should resolve");

            assert_eq!(config.workspace_root, PathBuf::from("/github/workspace"));
            assert_eq!(config.repo_root, PathBuf::from("/repo"));
        });
    }

    #[test]
    fn missing_environment_variable_is_error() {
        with_workspace_env(None, || {
            let err = resolve_config(None, None).expect_err("should fail");

            assert!(matches!(
                err,
                CliError::MissingEnvironment {
                    var: WORKSPACE_ENV_VAR
                }
            ));
        });
    }

    #[test]
    fn empty_environment_variable_is_error() {
        with_workspace_env(Some(""), || {
            let err = resolve_config(None, None).expect_err("should fail");

            assert!(matches!(err, CliError::MissingEnvironment { .. }));
        });
    }

    #[test]
    fn explicit_workspace_overrides_environment() {
        with_workspace_env(None, || {
            let config = resolve_config(None, Some(PathBuf::from("/override")))
                .expect("explicit workspace should not need the environment");

            assert_eq!(config.workspace_root, PathBuf::from("/override"));
        });
    }

    #[test]
    fn repo_root_defaults_to_current_directory() {
        with_workspace_env(Some("/ws"), || {
            let config = resolve_config(None, None).expect("should resolve");

            assert_eq!(
                config.repo_root,
                std::env::current_dir().expect("current dir")
            );
        });
    }
}
