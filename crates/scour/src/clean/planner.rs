//! Rule-based cleaning plan generation from a dataset profile.

use crate::profile::DatasetProfile;

use super::operations::{CleaningOperation, CleaningPlan, FillStrategy};

/// Columns missing more than this percentage of values are removed
/// outright rather than filled.
const REMOVE_COLUMN_THRESHOLD: f64 = 80.0;

/// Numeric columns missing more than this percentage use the median fill
/// (more robust at high missingness); below it, the mean.
const MEDIAN_THRESHOLD: f64 = 30.0;

/// Fallback fill for categorical columns with no observed values.
const CATEGORICAL_FALLBACK: &str = "Unknown";

/// Derives cleaning plans from profiles. Pure and deterministic: the same
/// profile always yields the same plan.
pub struct Planner;

impl Planner {
    /// Create a new planner.
    pub fn new() -> Self {
        Self
    }

    /// Derive an ordered cleaning plan. Per-column decisions run in the
    /// profile's column order, followed by duplicate removal and one
    /// numeric normalization per numeric column.
    pub fn plan(&self, profile: &DatasetProfile) -> CleaningPlan {
        let mut operations = Vec::new();
        let mut description = String::from("**Planned Operations:**\n");

        for (column, info) in profile.columns_with_nulls() {
            if info.null_percentage > REMOVE_COLUMN_THRESHOLD {
                description.push_str(&format!(
                    "• Remove column \"{}\" ({:.1}% missing)\n",
                    column, info.null_percentage
                ));
                operations.push(CleaningOperation::RemoveColumn {
                    column: column.clone(),
                });
            } else if info.kind.is_numeric() {
                // Fill values are snapshotted from the profile, not
                // recomputed at execution time.
                let Some(stats) = info.numeric else { continue };
                let strategy = if info.null_percentage > MEDIAN_THRESHOLD {
                    FillStrategy::Median
                } else {
                    FillStrategy::Mean
                };
                let value = match strategy {
                    FillStrategy::Mean => stats.mean,
                    FillStrategy::Median => stats.median,
                };
                description.push_str(&format!(
                    "• Fill \"{}\" missing values with {} ({})\n",
                    column,
                    strategy.label(),
                    value
                ));
                operations.push(CleaningOperation::FillNumeric {
                    column: column.clone(),
                    strategy,
                    value,
                });
            } else {
                let value = info.top_value().unwrap_or(CATEGORICAL_FALLBACK).to_string();
                description.push_str(&format!(
                    "• Fill \"{}\" missing values with \"{}\"\n",
                    column, value
                ));
                operations.push(CleaningOperation::FillCategorical {
                    column: column.clone(),
                    value,
                });
            }
        }

        description.push_str("• Remove duplicate rows\n");
        operations.push(CleaningOperation::RemoveDuplicates);

        for column in &profile.numeric_columns {
            description.push_str(&format!("• Clean numeric values in \"{}\"\n", column));
            operations.push(CleaningOperation::CleanNumeric {
                column: column.clone(),
            });
        }

        CleaningPlan {
            operations,
            description,
        }
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{ColumnKind, ColumnProfile, DatasetProfile, NumericSummary};
    use indexmap::IndexMap;

    fn numeric_column(null_percentage: f64, mean: f64, median: f64) -> ColumnProfile {
        let total = 100usize;
        let nulls = (null_percentage as usize).min(total);
        ColumnProfile {
            kind: ColumnKind::Numeric,
            total_count: total,
            non_null_count: total - nulls,
            null_count: nulls,
            null_percentage,
            unique_count: total - nulls,
            unique_percentage: 100.0,
            numeric: Some(NumericSummary {
                min: 0.0,
                max: 100.0,
                mean,
                median,
            }),
            top_values: Vec::new(),
        }
    }

    fn categorical_column(null_percentage: f64, top_values: Vec<(String, usize)>) -> ColumnProfile {
        let total = 100usize;
        let nulls = (null_percentage as usize).min(total);
        ColumnProfile {
            kind: ColumnKind::Categorical,
            total_count: total,
            non_null_count: total - nulls,
            null_count: nulls,
            null_percentage,
            unique_count: top_values.len(),
            unique_percentage: 10.0,
            numeric: None,
            top_values,
        }
    }

    fn make_profile(columns: Vec<(&str, ColumnProfile)>) -> DatasetProfile {
        let column_analysis: IndexMap<String, ColumnProfile> = columns
            .into_iter()
            .map(|(name, profile)| (name.to_string(), profile))
            .collect();
        let names: Vec<String> = column_analysis.keys().cloned().collect();
        let numeric_columns: Vec<String> = column_analysis
            .iter()
            .filter(|(_, p)| p.kind.is_numeric())
            .map(|(n, _)| n.clone())
            .collect();
        let categorical_columns: Vec<String> = column_analysis
            .iter()
            .filter(|(_, p)| !p.kind.is_numeric())
            .map(|(n, _)| n.clone())
            .collect();

        DatasetProfile {
            row_count: 100,
            column_count: names.len(),
            columns: names,
            column_analysis,
            numeric_columns,
            categorical_columns,
        }
    }

    #[test]
    fn test_high_null_column_is_removed() {
        let profile = make_profile(vec![("sparse", numeric_column(85.0, 5.0, 4.0))]);
        let plan = Planner::new().plan(&profile);

        assert_eq!(
            plan.operations[0],
            CleaningOperation::RemoveColumn {
                column: "sparse".to_string()
            }
        );
        assert!(
            !plan
                .operations
                .iter()
                .any(|op| matches!(op, CleaningOperation::FillNumeric { .. }))
        );
    }

    #[test]
    fn test_median_above_thirty_percent() {
        let profile = make_profile(vec![("x", numeric_column(50.0, 5.0, 4.0))]);
        let plan = Planner::new().plan(&profile);

        assert_eq!(
            plan.operations[0],
            CleaningOperation::FillNumeric {
                column: "x".to_string(),
                strategy: FillStrategy::Median,
                value: 4.0,
            }
        );
    }

    #[test]
    fn test_mean_at_low_missingness() {
        let profile = make_profile(vec![("x", numeric_column(10.0, 5.0, 4.0))]);
        let plan = Planner::new().plan(&profile);

        assert_eq!(
            plan.operations[0],
            CleaningOperation::FillNumeric {
                column: "x".to_string(),
                strategy: FillStrategy::Mean,
                value: 5.0,
            }
        );
    }

    #[test]
    fn test_categorical_fill_uses_top_value() {
        let profile = make_profile(vec![(
            "status",
            categorical_column(20.0, vec![("active".to_string(), 60)]),
        )]);
        let plan = Planner::new().plan(&profile);

        assert_eq!(
            plan.operations[0],
            CleaningOperation::FillCategorical {
                column: "status".to_string(),
                value: "active".to_string(),
            }
        );
    }

    #[test]
    fn test_categorical_fallback_when_no_values() {
        let profile = make_profile(vec![("status", categorical_column(20.0, Vec::new()))]);
        let plan = Planner::new().plan(&profile);

        assert_eq!(
            plan.operations[0],
            CleaningOperation::FillCategorical {
                column: "status".to_string(),
                value: "Unknown".to_string(),
            }
        );
    }

    #[test]
    fn test_clean_column_gets_no_fill() {
        let profile = make_profile(vec![("x", numeric_column(0.0, 5.0, 4.0))]);
        let plan = Planner::new().plan(&profile);

        // Only duplicate removal and numeric normalization remain
        assert_eq!(plan.operations.len(), 2);
        assert_eq!(plan.operations[0], CleaningOperation::RemoveDuplicates);
        assert_eq!(
            plan.operations[1],
            CleaningOperation::CleanNumeric {
                column: "x".to_string()
            }
        );
    }

    #[test]
    fn test_operation_order() {
        let profile = make_profile(vec![
            ("a", numeric_column(10.0, 5.0, 4.0)),
            ("b", categorical_column(20.0, vec![("x".to_string(), 10)])),
        ]);
        let plan = Planner::new().plan(&profile);

        assert!(matches!(
            plan.operations[0],
            CleaningOperation::FillNumeric { .. }
        ));
        assert!(matches!(
            plan.operations[1],
            CleaningOperation::FillCategorical { .. }
        ));
        assert_eq!(plan.operations[2], CleaningOperation::RemoveDuplicates);
        assert_eq!(
            plan.operations[3],
            CleaningOperation::CleanNumeric {
                column: "a".to_string()
            }
        );
    }

    #[test]
    fn test_plan_is_deterministic() {
        let profile = make_profile(vec![
            ("a", numeric_column(40.0, 5.0, 4.0)),
            ("b", categorical_column(90.0, Vec::new())),
        ]);
        let planner = Planner::new();

        assert_eq!(planner.plan(&profile), planner.plan(&profile));
    }

    #[test]
    fn test_description_matches_operations() {
        let profile = make_profile(vec![("sparse", numeric_column(85.0, 5.0, 4.0))]);
        let plan = Planner::new().plan(&profile);

        assert!(plan.description.contains("Remove column \"sparse\" (85.0% missing)"));
        assert!(plan.description.contains("Remove duplicate rows"));
    }
}
