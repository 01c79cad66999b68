//! Main engine facade and public API.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clean::{
    CleanOptions, CleaningPlan, ExecutionLog, Executor, Planner, cleaning_report,
};
use crate::error::{Result, ScourError};
use crate::input::{Dataset, Parser, ParserConfig, SourceMetadata};
use crate::llm::{InsightProvider, analysis_prompt, question_prompt};
use crate::profile::{DatasetProfile, Profiler};
use crate::summary::dataset_summary;

/// Configuration for the engine.
#[derive(Debug, Clone, Default)]
pub struct ScourConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Cleaning execution options.
    pub clean: CleanOptions,
}

/// Result of profiling a dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    /// The computed profile.
    pub profile: DatasetProfile,
    /// Markup summary for the chat/report surface.
    pub summary: String,
}

/// Result of a full cleaning pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningOutcome {
    /// The plan that was applied.
    pub plan: CleaningPlan,
    /// The cleaned dataset.
    pub cleaned: Dataset,
    /// Operation counters.
    pub log: ExecutionLog,
    /// Human-readable before/after report.
    pub report: String,
}

/// The profiling and cleaning engine.
///
/// Holds no dataset state: each call starts from a caller-supplied dataset
/// and leaves the caller's copy untouched, so repeated or overlapping
/// invocations cannot corrupt a shared original.
pub struct Scour {
    config: ScourConfig,
    parser: Parser,
    profiler: Profiler,
    provider: Option<Arc<dyn InsightProvider>>,
}

impl Scour {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self::with_config(ScourConfig::default())
    }

    /// Create an engine with custom configuration.
    pub fn with_config(config: ScourConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        Self {
            config,
            parser,
            profiler: Profiler::new(),
            provider: None,
        }
    }

    /// Attach a remote insight provider for [`Scour::insight`] and
    /// [`Scour::ask`].
    pub fn with_insight(mut self, provider: impl InsightProvider + 'static) -> Self {
        self.provider = Some(Arc::new(provider));
        self
    }

    /// Parse a CSV/TSV file into a dataset.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(Dataset, SourceMetadata)> {
        self.parser.parse_file(path)
    }

    /// Profile a dataset and render its summary. `None` when the dataset
    /// is empty - there is nothing to report.
    pub fn analyze(&self, dataset: &Dataset) -> Option<Analysis> {
        let profile = self.profiler.profile(dataset)?;
        let summary = dataset_summary(&profile);
        Some(Analysis { profile, summary })
    }

    /// Run the full profile → plan → execute → report pipeline.
    /// `None` when the dataset is empty.
    pub fn clean(&self, dataset: &Dataset) -> Option<CleaningOutcome> {
        let profile = self.profiler.profile(dataset)?;
        let plan = Planner::new().plan(&profile);
        let executor = Executor::with_options(self.config.clean.clone());
        let (cleaned, log) = executor.apply(dataset, &plan);
        let report = cleaning_report(dataset, &cleaned, &plan);

        Some(CleaningOutcome {
            plan,
            cleaned,
            log,
            report,
        })
    }

    /// Ask the remote provider for automatic insights about a dataset.
    pub fn insight(&self, dataset: &Dataset) -> Result<String> {
        let provider = self.provider()?;
        let profile = self.require_profile(dataset)?;
        provider.generate_insight(&analysis_prompt(&profile, dataset))
    }

    /// Answer a free-form user question about a dataset via the remote
    /// provider.
    pub fn ask(&self, dataset: &Dataset, question: &str) -> Result<String> {
        let provider = self.provider()?;
        let profile = self.require_profile(dataset)?;
        provider.generate_insight(&question_prompt(&profile, question))
    }

    fn provider(&self) -> Result<&Arc<dyn InsightProvider>> {
        self.provider
            .as_ref()
            .ok_or_else(|| ScourError::Config("No insight provider configured".to_string()))
    }

    fn require_profile(&self, dataset: &Dataset) -> Result<DatasetProfile> {
        self.profiler
            .profile(dataset)
            .ok_or_else(|| ScourError::EmptyData("No rows to analyze".to_string()))
    }
}

impl Default for Scour {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Row, Value};
    use crate::llm::MockProvider;

    fn make_dataset() -> Dataset {
        let rows = vec![
            [("x", Value::Str("1".into())), ("y", Value::Str("a".into()))],
            [("x", Value::Str("".into())), ("y", Value::Str("a".into()))],
            [("x", Value::Str("3".into())), ("y", Value::Null)],
        ]
        .into_iter()
        .map(|pairs| {
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect::<Row>()
        })
        .collect();
        Dataset::new(rows)
    }

    #[test]
    fn test_analyze_empty_returns_none() {
        let engine = Scour::new();
        assert!(engine.analyze(&Dataset::default()).is_none());
        assert!(engine.clean(&Dataset::default()).is_none());
    }

    #[test]
    fn test_analyze_produces_profile_and_summary() {
        let engine = Scour::new();
        let analysis = engine.analyze(&make_dataset()).unwrap();

        assert_eq!(analysis.profile.row_count, 3);
        assert!(analysis.summary.contains("**Rows:** 3"));
    }

    #[test]
    fn test_clean_produces_report_and_new_dataset() {
        let engine = Scour::new();
        let dataset = make_dataset();
        let outcome = engine.clean(&dataset).unwrap();

        assert!(outcome.report.contains("Original rows: 3"));
        assert_eq!(outcome.log.operations_applied, outcome.plan.operations.len());
        // The caller's dataset still has its gap
        assert_eq!(dataset.get(1, "x"), Some(&Value::Str(String::new())));
    }

    #[test]
    fn test_insight_requires_provider() {
        let engine = Scour::new();
        let result = engine.insight(&make_dataset());

        assert!(matches!(result, Err(ScourError::Config(_))));
    }

    #[test]
    fn test_insight_uses_provider() {
        let engine = Scour::new().with_insight(MockProvider::new());
        let insight = engine.insight(&make_dataset()).unwrap();

        assert!(insight.contains("Mock insight"));
    }

    #[test]
    fn test_provider_failure_does_not_affect_cleaning() {
        let engine = Scour::new().with_insight(MockProvider::failing());
        let dataset = make_dataset();

        let outcome = engine.clean(&dataset).unwrap();
        assert!(outcome.cleaned.len() <= dataset.len());

        let result = engine.insight(&dataset);
        assert!(matches!(result, Err(ScourError::Service(_))));

        // The already-computed outcome is unaffected by the failure
        assert!(outcome.report.contains("Operations Performed"));
    }
}
