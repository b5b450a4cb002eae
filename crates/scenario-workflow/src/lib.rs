mod error;
mod selector;
mod serialize;
mod types;

pub use error::WorkflowError;
pub use selector::{
    DEFAULT_PACKAGE_SHARE, DEFAULT_SCENARIO_PREFIX, DEFAULT_SCENARIO_SUFFIX, ScenarioSelector,
};
pub use serialize::{parse_workflow, serialize_workflow};
pub use types::{ScenarioEntry, TestConfiguration};
