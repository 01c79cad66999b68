//! Insight provider trait and configuration.

use crate::error::Result;

/// Configuration for insight providers.
#[derive(Debug, Clone)]
pub struct InsightConfig {
    /// Model to use (e.g., "gpt-3.5-turbo").
    pub model: String,
    /// Maximum tokens in the response.
    pub max_tokens: usize,
    /// Sampling temperature (0.0-1.0).
    pub temperature: f64,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: 1000,
            temperature: 0.7,
        }
    }
}

/// Capability interface for remote language-model insights.
///
/// Implementations must be thread-safe (Send + Sync). The engine treats a
/// failing provider as informational only: profiling and cleaning results
/// already computed locally are never affected.
pub trait InsightProvider: Send + Sync {
    /// Generate free-text insights for a prepared prompt.
    ///
    /// Fails with a `Service` error on a non-2xx response or transport
    /// failure.
    fn generate_insight(&self, prompt: &str) -> Result<String>;

    /// Get the configuration for this provider.
    fn config(&self) -> &InsightConfig;

    /// Get the name of this provider (for logging/debugging).
    fn name(&self) -> &str;
}
