use crate::ScenarioEntry;

pub const DEFAULT_SCENARIO_PREFIX: &str = "test_runner/scenario_test_runner/scenario/";
pub const DEFAULT_SCENARIO_SUFFIX: &str = ".yaml";
pub const DEFAULT_PACKAGE_SHARE: &str = "$(find-pkg-share scenario_test_runner)/scenario/";

/// Decides which changed files are scenarios and how the runner should find them.
///
/// Matching is a plain prefix and suffix test on the repository-relative path
/// as reported by git (forward slashes). No glob or regex semantics apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioSelector {
    pub prefix: String,
    pub suffix: String,
    pub package_share: String,
}

impl Default for ScenarioSelector {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_SCENARIO_PREFIX.to_string(),
            suffix: DEFAULT_SCENARIO_SUFFIX.to_string(),
            package_share: DEFAULT_PACKAGE_SHARE.to_string(),
        }
    }
}

impl ScenarioSelector {
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        path.starts_with(&self.prefix) && path.ends_with(&self.suffix)
    }

    /// Builds the runner entry for `path`, or `None` if it is not a scenario.
    #[must_use]
    pub fn entry_for(&self, path: &str) -> Option<ScenarioEntry> {
        if !self.matches(path) {
            return None;
        }
        Some(ScenarioEntry::new(format!(
            "{}{}",
            self.package_share,
            base_name(path)
        )))
    }

    /// Selects scenario entries in input order.
    #[must_use]
    pub fn select<I, S>(&self, paths: I) -> Vec<ScenarioEntry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        paths
            .into_iter()
            .filter_map(|path| self.entry_for(path.as_ref()))
            .collect()
    }
}

fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
