//! Profile types describing per-column and dataset-level statistics.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Classification of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// More than 70% of non-null values coerce to finite numbers.
    Numeric,
    /// Everything else.
    Categorical,
}

impl ColumnKind {
    /// Returns true for numeric columns.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnKind::Numeric)
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Numeric => write!(f, "numeric"),
            ColumnKind::Categorical => write!(f, "categorical"),
        }
    }
}

/// Aggregate statistics over a numeric column's coercible values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub min: f64,
    pub max: f64,
    /// Rounded to two decimals.
    pub mean: f64,
    /// Exact: middle element for odd counts, average of the two central
    /// elements for even counts.
    pub median: f64,
}

/// Per-column statistics and classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Numeric or categorical.
    pub kind: ColumnKind,
    /// Total number of rows (including missing values).
    pub total_count: usize,
    /// Values that are neither null nor the empty string.
    pub non_null_count: usize,
    /// `total_count - non_null_count`.
    pub null_count: usize,
    /// Percentage of missing values (0-100, one decimal).
    pub null_percentage: f64,
    /// Distinct non-null values (compared by typed value).
    pub unique_count: usize,
    /// Unique values relative to the non-null count, one decimal; defined
    /// as 0 when the column has no non-null values.
    pub unique_percentage: f64,
    /// Present for numeric columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric: Option<NumericSummary>,
    /// Most frequent values for categorical columns: at most five
    /// (value, count) pairs, descending count, ties in first-encountered
    /// order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_values: Vec<(String, usize)>,
}

impl ColumnProfile {
    /// The most frequent value, if any.
    pub fn top_value(&self) -> Option<&str> {
        self.top_values.first().map(|(value, _)| value.as_str())
    }
}

/// Derived statistics for an entire dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetProfile {
    /// Number of rows.
    pub row_count: usize,
    /// Number of columns (from the first row's field set).
    pub column_count: usize,
    /// Column names in original order.
    pub columns: Vec<String>,
    /// Per-column profiles, keyed in original column order.
    pub column_analysis: IndexMap<String, ColumnProfile>,
    /// Columns classified numeric, order-preserving.
    pub numeric_columns: Vec<String>,
    /// Columns classified categorical, order-preserving.
    pub categorical_columns: Vec<String>,
}

impl DatasetProfile {
    /// Look up a column profile by name.
    pub fn column(&self, name: &str) -> Option<&ColumnProfile> {
        self.column_analysis.get(name)
    }

    /// Columns with at least one missing value, in column order.
    pub fn columns_with_nulls(&self) -> impl Iterator<Item = (&String, &ColumnProfile)> {
        self.column_analysis
            .iter()
            .filter(|(_, profile)| profile.null_count > 0)
    }
}
