//! Cleaning operations, plans, and execution records.

use serde::{Deserialize, Serialize};

/// Imputation strategy for numeric fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillStrategy {
    Mean,
    Median,
}

impl FillStrategy {
    /// Lowercase label used in plan and report text.
    pub fn label(&self) -> &'static str {
        match self {
            FillStrategy::Mean => "mean",
            FillStrategy::Median => "median",
        }
    }
}

/// A single remediation step derived from a profile. Operations are
/// generated once per cleaning run and applied once, in generation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CleaningOperation {
    /// Drop a column from every row.
    RemoveColumn { column: String },
    /// Replace null values in a numeric column with a fill value
    /// snapshotted from the profile.
    FillNumeric {
        column: String,
        strategy: FillStrategy,
        value: f64,
    },
    /// Replace missing values in a categorical column with the most
    /// frequent value.
    FillCategorical { column: String, value: String },
    /// Keep only the first occurrence of structurally identical rows.
    RemoveDuplicates,
    /// Normalize numeric-looking values to numeric type.
    CleanNumeric { column: String },
}

impl CleaningOperation {
    /// One-line rendering used by the cleaning report.
    pub fn describe(&self) -> String {
        match self {
            CleaningOperation::RemoveColumn { column } => {
                format!("Removed column: \"{}\"", column)
            }
            CleaningOperation::FillNumeric {
                column, strategy, ..
            } => {
                format!(
                    "Filled numeric values in \"{}\" with {}",
                    column,
                    strategy.label()
                )
            }
            CleaningOperation::FillCategorical { column, value } => {
                format!("Filled categorical values in \"{}\" with \"{}\"", column, value)
            }
            CleaningOperation::RemoveDuplicates => "Removed duplicate rows".to_string(),
            CleaningOperation::CleanNumeric { column } => {
                format!("Cleaned numeric formats in \"{}\"", column)
            }
        }
    }
}

/// An ordered list of operations plus a display rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningPlan {
    /// Operations in application order.
    pub operations: Vec<CleaningOperation>,
    /// Line-per-operation rendering in the same order. Display only.
    pub description: String,
}

/// What one executed operation changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationChange {
    /// Description of the change.
    pub description: String,
    /// Number of cells (or rows, for duplicate removal) affected.
    pub values_changed: usize,
}

/// Counters accumulated while applying a plan. A no-op operation still
/// counts as performed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionLog {
    /// Number of operations applied.
    pub operations_applied: usize,
    /// Duplicate rows removed.
    pub rows_removed: usize,
    /// Per-operation change records.
    pub changes: Vec<OperationChange>,
}

impl ExecutionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a change.
    pub fn add_change(&mut self, change: OperationChange) {
        self.operations_applied += 1;
        self.changes.push(change);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_operations() {
        let remove = CleaningOperation::RemoveColumn {
            column: "notes".to_string(),
        };
        assert_eq!(remove.describe(), "Removed column: \"notes\"");

        let fill = CleaningOperation::FillNumeric {
            column: "age".to_string(),
            strategy: FillStrategy::Median,
            value: 30.0,
        };
        assert_eq!(fill.describe(), "Filled numeric values in \"age\" with median");

        assert_eq!(
            CleaningOperation::RemoveDuplicates.describe(),
            "Removed duplicate rows"
        );
    }

    #[test]
    fn test_log_counts_operations() {
        let mut log = ExecutionLog::new();
        log.add_change(OperationChange {
            description: "x".to_string(),
            values_changed: 3,
        });
        log.add_change(OperationChange {
            description: "y".to_string(),
            values_changed: 0,
        });

        assert_eq!(log.operations_applied, 2);
        assert_eq!(log.changes.len(), 2);
    }
}
