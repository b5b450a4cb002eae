use serde::{Deserialize, Serialize};

/// One scenario for the test runner to execute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioEntry {
    /// Resource lookup expression, resolved by the test runner.
    pub path: String,
}

impl ScenarioEntry {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// The workflow document consumed by `scenario_test_runner`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TestConfiguration {
    #[serde(rename = "Scenario", default)]
    pub scenarios: Vec<ScenarioEntry>,
}

impl TestConfiguration {
    #[must_use]
    pub fn new(scenarios: Vec<ScenarioEntry>) -> Self {
        Self { scenarios }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }
}

impl FromIterator<ScenarioEntry> for TestConfiguration {
    fn from_iter<I: IntoIterator<Item = ScenarioEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
