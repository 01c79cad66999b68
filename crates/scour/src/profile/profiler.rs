//! Single-pass dataset profiling: classification and per-column statistics.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::input::{Dataset, Value};

use super::types::{ColumnKind, ColumnProfile, DatasetProfile, NumericSummary};

/// Fraction of non-null values that must coerce to numbers for a column to
/// classify as numeric. Fixed policy, not user-configurable.
const NUMERIC_RATIO: f64 = 0.7;

/// Number of most-frequent values retained for categorical columns.
const TOP_VALUE_LIMIT: usize = 5;

/// Profiles datasets column by column.
pub struct Profiler;

impl Profiler {
    /// Create a new profiler.
    pub fn new() -> Self {
        Self
    }

    /// Profile a dataset. Returns `None` for an empty dataset; downstream
    /// callers treat an absent profile as "nothing to report".
    pub fn profile(&self, dataset: &Dataset) -> Option<DatasetProfile> {
        if dataset.is_empty() {
            return None;
        }

        let columns = dataset.columns();
        let mut column_analysis = IndexMap::with_capacity(columns.len());
        for name in &columns {
            column_analysis.insert(name.clone(), self.profile_column(dataset, name));
        }

        let numeric_columns: Vec<String> = column_analysis
            .iter()
            .filter(|(_, profile)| profile.kind.is_numeric())
            .map(|(name, _)| name.clone())
            .collect();
        let categorical_columns: Vec<String> = column_analysis
            .iter()
            .filter(|(_, profile)| !profile.kind.is_numeric())
            .map(|(name, _)| name.clone())
            .collect();

        Some(DatasetProfile {
            row_count: dataset.len(),
            column_count: columns.len(),
            columns,
            column_analysis,
            numeric_columns,
            categorical_columns,
        })
    }

    fn profile_column(&self, dataset: &Dataset, name: &str) -> ColumnProfile {
        let total_count = dataset.len();

        // Values that are present: not null, not empty string. Fields
        // absent from a row count as missing.
        let values: Vec<&Value> = dataset
            .rows
            .iter()
            .filter_map(|row| row.get(name))
            .filter(|value| !value.is_missing())
            .collect();
        let non_null_count = values.len();
        let null_count = total_count - non_null_count;

        let numeric_values: Vec<f64> = values
            .iter()
            .filter_map(|value| value.coerce_number())
            .collect();
        let kind = if numeric_values.len() as f64 > NUMERIC_RATIO * non_null_count as f64 {
            ColumnKind::Numeric
        } else {
            ColumnKind::Categorical
        };

        let unique_count = {
            let mut seen = HashSet::new();
            for value in &values {
                seen.insert(value.identity_key());
            }
            seen.len()
        };

        let null_percentage = round1(null_count as f64 / total_count as f64 * 100.0);
        let unique_percentage = if non_null_count == 0 {
            0.0
        } else {
            round1(unique_count as f64 / non_null_count as f64 * 100.0)
        };

        let (numeric, top_values) = match kind {
            ColumnKind::Numeric => (numeric_summary(&numeric_values), Vec::new()),
            ColumnKind::Categorical => (None, top_values(&values)),
        };

        ColumnProfile {
            kind,
            total_count,
            non_null_count,
            null_count,
            null_percentage,
            unique_count,
            unique_percentage,
            numeric,
            top_values,
        }
    }
}

impl Default for Profiler {
    fn default() -> Self {
        Self::new()
    }
}

fn numeric_summary(values: &[f64]) -> Option<NumericSummary> {
    if values.is_empty() {
        return None;
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = round2(values.iter().sum::<f64>() / values.len() as f64);

    Some(NumericSummary {
        min,
        max,
        mean,
        median: median(values),
    })
}

/// Exact median: sort ascending, middle element for odd lengths, mean of
/// the two central elements for even lengths.
fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Frequency-count values by display text and keep the most common. The
/// sort is stable, so ties stay in first-encountered order.
fn top_values(values: &[&Value]) -> Vec<(String, usize)> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for value in values {
        *counts.entry(value.as_text()).or_insert(0) += 1;
    }

    let mut pairs: Vec<(String, usize)> = counts.into_iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1));
    pairs.truncate(TOP_VALUE_LIMIT);
    pairs
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
