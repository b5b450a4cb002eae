use crate::TestConfiguration;
use crate::error::WorkflowError;

#[must_use = "serialization result should be handled"]
pub fn serialize_workflow(config: &TestConfiguration) -> Result<String, WorkflowError> {
    Ok(serde_yml::to_string(config)?)
}

#[must_use = "parsing result should be handled"]
pub fn parse_workflow(content: &str) -> Result<TestConfiguration, WorkflowError> {
    Ok(serde_yml::from_str(content)?)
}
