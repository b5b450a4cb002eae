use std::path::Path;

use scenario_workflow::TestConfiguration;

use crate::Result;

pub trait WorkflowWriter: Send + Sync {
    /// Persists `config` at `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be serialized or written. On
    /// error no partial file is left at `path`.
    fn write_workflow(&self, path: &Path, config: &TestConfiguration) -> Result<()>;
}
