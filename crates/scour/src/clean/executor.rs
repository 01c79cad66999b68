//! Sequential application of cleaning plans.

use std::collections::HashSet;

use crate::input::{Dataset, Value, row_identity};

use super::operations::{CleaningOperation, CleaningPlan, ExecutionLog, OperationChange};

/// How fills decide that a categorical cell is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillPolicy {
    /// Null, absent, empty-string, `false`, `0`, and NaN cells all count
    /// as missing. Matches the engine's historical behavior, which can
    /// overwrite legitimate zeroes.
    #[default]
    Permissive,
    /// Only null or absent cells count as missing.
    NullOnly,
}

/// Options controlling plan execution.
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    /// Missingness policy for categorical fills. Numeric fills are always
    /// null/absent-only.
    pub fill_policy: FillPolicy,
}

/// Applies cleaning plans to datasets.
pub struct Executor {
    options: CleanOptions,
}

impl Executor {
    /// Create an executor with default options.
    pub fn new() -> Self {
        Self {
            options: CleanOptions::default(),
        }
    }

    /// Create an executor with custom options.
    pub fn with_options(options: CleanOptions) -> Self {
        Self { options }
    }

    /// Apply every operation in order. Each operation consumes the dataset
    /// produced by its predecessor; the caller's dataset is untouched.
    /// Operations never fail: one that finds nothing to change (or names
    /// an unknown column) is a no-op that still counts as performed.
    pub fn apply(&self, dataset: &Dataset, plan: &CleaningPlan) -> (Dataset, ExecutionLog) {
        let mut data = dataset.clone();
        let mut log = ExecutionLog::new();

        for operation in &plan.operations {
            let change = match operation {
                CleaningOperation::RemoveColumn { column } => {
                    Self::remove_column(&mut data, column)
                }
                CleaningOperation::FillNumeric { column, value, .. } => {
                    Self::fill_numeric(&mut data, column, *value)
                }
                CleaningOperation::FillCategorical { column, value } => {
                    self.fill_categorical(&mut data, column, value)
                }
                CleaningOperation::RemoveDuplicates => {
                    let change = Self::remove_duplicates(&mut data);
                    log.rows_removed += change.values_changed;
                    change
                }
                CleaningOperation::CleanNumeric { column } => {
                    Self::clean_numeric(&mut data, column)
                }
            };
            log.add_change(change);
        }

        (data, log)
    }

    fn remove_column(data: &mut Dataset, column: &str) -> OperationChange {
        let mut changed = 0;
        for row in &mut data.rows {
            if row.shift_remove(column).is_some() {
                changed += 1;
            }
        }
        OperationChange {
            description: format!("Removed column \"{}\" from {} row(s)", column, changed),
            values_changed: changed,
        }
    }

    fn fill_numeric(data: &mut Dataset, column: &str, value: f64) -> OperationChange {
        let mut changed = 0;
        for row in &mut data.rows {
            let missing = matches!(row.get(column), None | Some(Value::Null));
            if missing {
                row.insert(column.to_string(), Value::Number(value));
                changed += 1;
            }
        }
        OperationChange {
            description: format!("Filled {} numeric value(s) in \"{}\"", changed, column),
            values_changed: changed,
        }
    }

    fn fill_categorical(&self, data: &mut Dataset, column: &str, value: &str) -> OperationChange {
        let mut changed = 0;
        for row in &mut data.rows {
            let missing = match self.options.fill_policy {
                FillPolicy::Permissive => row.get(column).is_none_or(Value::is_falsy),
                FillPolicy::NullOnly => matches!(row.get(column), None | Some(Value::Null)),
            };
            if missing {
                row.insert(column.to_string(), Value::Str(value.to_string()));
                changed += 1;
            }
        }
        OperationChange {
            description: format!("Filled {} categorical value(s) in \"{}\"", changed, column),
            values_changed: changed,
        }
    }

    fn remove_duplicates(data: &mut Dataset) -> OperationChange {
        let original_len = data.rows.len();
        let mut seen = HashSet::new();
        data.rows.retain(|row| seen.insert(row_identity(row)));
        let removed = original_len - data.rows.len();
        OperationChange {
            description: format!("Removed {} duplicate row(s)", removed),
            values_changed: removed,
        }
    }

    fn clean_numeric(data: &mut Dataset, column: &str) -> OperationChange {
        let mut changed = 0;
        for row in &mut data.rows {
            let Some(value) = row.get(column) else { continue };
            if let Some(number) = value.coerce_number() {
                if *value != Value::Number(number) {
                    row.insert(column.to_string(), Value::Number(number));
                    changed += 1;
                }
            }
        }
        OperationChange {
            description: format!("Normalized {} value(s) in \"{}\"", changed, column),
            values_changed: changed,
        }
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new()
    }
}
