use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("failed to process workflow YAML: {0}")]
    Yaml(#[from] serde_yml::Error),
}
