//! Mock insight provider for testing.

use crate::error::{Result, ScourError};

use super::provider::{InsightConfig, InsightProvider};

/// Mock provider that returns predictable responses without network access.
pub struct MockProvider {
    config: InsightConfig,
    fail: bool,
}

impl MockProvider {
    /// Create a new mock provider.
    pub fn new() -> Self {
        Self {
            config: InsightConfig::default(),
            fail: false,
        }
    }

    /// Create a provider that always fails with a service error, for
    /// exercising failure paths.
    pub fn failing() -> Self {
        Self {
            config: InsightConfig::default(),
            fail: true,
        }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightProvider for MockProvider {
    fn generate_insight(&self, prompt: &str) -> Result<String> {
        if self.fail {
            return Err(ScourError::Service("mock provider failure".to_string()));
        }

        // Echo enough of the prompt for assertions
        let preview: String = prompt.chars().take(120).collect();
        Ok(format!("Mock insight based on: {}", preview))
    }

    fn config(&self) -> &InsightConfig {
        &self.config
    }

    fn name(&self) -> &str {
        "mock"
    }
}
