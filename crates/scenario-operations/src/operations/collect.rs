use std::path::PathBuf;

use scenario_workflow::{ScenarioSelector, TestConfiguration};
use tracing::{debug, info};

use crate::Result;
use crate::traits::{DiffSource, WorkflowWriter};

/// Location of the generated workflow, relative to the workspace root.
pub const WORKFLOW_OUTPUT_PATH: &[&str] = &[
    "test_runner",
    "scenario_test_runner",
    "config",
    "new_workflow.yaml",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorConfig {
    /// Any path inside the repository whose last commit is inspected.
    pub repo_root: PathBuf,
    /// Root under which the workflow file is written.
    pub workspace_root: PathBuf,
    pub selector: ScenarioSelector,
}

impl CollectorConfig {
    #[must_use]
    pub fn new(repo_root: impl Into<PathBuf>, workspace_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
            workspace_root: workspace_root.into(),
            selector: ScenarioSelector::default(),
        }
    }

    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        WORKFLOW_OUTPUT_PATH
            .iter()
            .fold(self.workspace_root.clone(), |path, component| {
                path.join(component)
            })
    }
}

#[derive(Debug)]
pub struct CollectOutput {
    pub output_path: PathBuf,
    pub configuration: TestConfiguration,
    pub changed_file_count: usize,
}

pub struct CollectOperation<D, W> {
    diff_source: D,
    writer: W,
}

impl<D, W> CollectOperation<D, W>
where
    D: DiffSource,
    W: WorkflowWriter,
{
    pub fn new(diff_source: D, writer: W) -> Self {
        Self {
            diff_source,
            writer,
        }
    }

    /// Collects the scenarios touched by the last commit and writes them as a
    /// workflow for the scenario test runner. The file is written even when no
    /// scenario changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the changed files cannot be determined or the
    /// workflow file cannot be written. Nothing is written if the diff fails.
    pub fn execute(&self, config: &CollectorConfig) -> Result<CollectOutput> {
        let changed_files = self.diff_source.changed_files(&config.repo_root)?;
        debug!(count = changed_files.len(), "changed files since HEAD^");

        let configuration = TestConfiguration::new(config.selector.select(&changed_files));
        for entry in &configuration.scenarios {
            debug!(path = %entry.path, "selected scenario");
        }

        let output_path = config.output_path();
        self.writer.write_workflow(&output_path, &configuration)?;

        info!(
            scenarios = configuration.len(),
            output = %output_path.display(),
            "generated test workflow"
        );

        Ok(CollectOutput {
            output_path,
            configuration,
            changed_file_count: changed_files.len(),
        })
    }
}
