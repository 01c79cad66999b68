//! Prompt templates for insight generation.

use crate::input::{Dataset, Row};
use crate::profile::DatasetProfile;

/// Number of sample rows included in the analysis prompt. Kept small so
/// the prompt stays cheap regardless of dataset size.
const SAMPLE_ROWS: usize = 5;

/// Build the automatic-analysis prompt sent after a dataset is profiled.
pub fn analysis_prompt(profile: &DatasetProfile, dataset: &Dataset) -> String {
    let sample_size = SAMPLE_ROWS.min(dataset.len());
    let sample: Vec<&Row> = dataset.rows.iter().take(sample_size).collect();
    let sample_json =
        serde_json::to_string_pretty(&sample).unwrap_or_else(|_| "[]".to_string());

    let column_details = profile
        .column_analysis
        .iter()
        .map(|(name, info)| {
            format!("{}: {}, {:.1}% missing", name, info.kind, info.null_percentage)
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Analyze this CSV dataset and provide insights:

Dataset Info:
- Rows: {}
- Columns: {}
- Numeric columns: {}
- Categorical columns: {}

Sample data (first {} rows):
{}

Column details:
{}

Please provide:
1. What type of data this appears to be (business, scientific, etc.)
2. Key insights and patterns you notice
3. Specific data cleaning recommendations
4. Best visualization recommendations with exact column names
5. Interesting questions this data could help answer

Be specific and actionable in your recommendations."#,
        profile.row_count,
        profile.column_count,
        profile.numeric_columns.join(", "),
        profile.categorical_columns.join(", "),
        sample_size,
        sample_json,
        column_details,
    )
}

/// Build the prompt for a free-form user question about a dataset.
pub fn question_prompt(profile: &DatasetProfile, question: &str) -> String {
    format!(
        r#"You are a data analyst assistant. Answer the user's question about their CSV dataset.

Dataset context:
- Rows: {}
- Columns: {}
- Numeric columns: {}
- Categorical columns: {}

User question: {}

Provide a helpful, specific answer. If they ask about visualization, suggest exact chart types and column combinations. If they ask about data cleaning, be specific about which columns need attention."#,
        profile.row_count,
        profile.columns.join(", "),
        profile.numeric_columns.join(", "),
        profile.categorical_columns.join(", "),
        question,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Value;
    use crate::profile::Profiler;

    fn make_dataset() -> Dataset {
        let rows = (0..10)
            .map(|i| {
                let mut row = Row::new();
                row.insert("amount".to_string(), Value::Number(i as f64));
                row.insert("city".to_string(), Value::Str("Oslo".to_string()));
                row
            })
            .collect();
        Dataset::new(rows)
    }

    #[test]
    fn test_analysis_prompt_includes_profile_and_sample() {
        let dataset = make_dataset();
        let profile = Profiler::new().profile(&dataset).unwrap();
        let prompt = analysis_prompt(&profile, &dataset);

        assert!(prompt.contains("Rows: 10"));
        assert!(prompt.contains("Sample data (first 5 rows):"));
        assert!(prompt.contains("amount: numeric, 0.0% missing"));
        assert!(prompt.contains("Oslo"));
    }

    #[test]
    fn test_question_prompt_includes_question() {
        let dataset = make_dataset();
        let profile = Profiler::new().profile(&dataset).unwrap();
        let prompt = question_prompt(&profile, "Which column has outliers?");

        assert!(prompt.contains("Which column has outliers?"));
        assert!(prompt.contains("amount, city"));
    }
}
