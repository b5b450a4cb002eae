use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("environment variable '{var}' is not set (use --workspace to override)")]
    MissingEnvironment { var: &'static str },

    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("failed to generate scenario workflow")]
    Operation(#[from] scenario_operations::OperationError),
}

pub type Result<T> = std::result::Result<T, CliError>;
