mod collect;

pub use collect::{CollectOperation, CollectOutput, CollectorConfig, WORKFLOW_OUTPUT_PATH};
