//! Human-readable dataset summaries for the chat/report surface.
//!
//! Plain structured text with light markup (bold and bullet markers),
//! never HTML.

use crate::profile::DatasetProfile;

/// Render the dataset overview shown after every upload: shape, column
/// classification, worst data quality issues, and starter chart ideas.
pub fn dataset_summary(profile: &DatasetProfile) -> String {
    let mut summary = String::from("📊 **Dataset Overview:**\n");
    summary.push_str(&format!("• **Rows:** {}\n", profile.row_count));
    summary.push_str(&format!("• **Columns:** {}\n", profile.column_count));
    summary.push_str(&format!(
        "• **Numeric columns:** {} ({})\n",
        profile.numeric_columns.len(),
        profile.numeric_columns.join(", ")
    ));
    summary.push_str(&format!(
        "• **Categorical columns:** {} ({})\n\n",
        profile.categorical_columns.len(),
        profile.categorical_columns.join(", ")
    ));

    let mut with_nulls: Vec<_> = profile.columns_with_nulls().collect();
    with_nulls.sort_by(|a, b| {
        b.1.null_percentage
            .partial_cmp(&a.1.null_percentage)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    if !with_nulls.is_empty() {
        summary.push_str("🔍 **Data Quality Issues:**\n");
        for (column, info) in with_nulls.iter().take(3) {
            summary.push_str(&format!(
                "• **{}:** {:.1}% missing values\n",
                column, info.null_percentage
            ));
        }
        summary.push('\n');
    }

    summary.push_str("📈 **Visualization Suggestions:**\n");
    if profile.numeric_columns.len() >= 2 {
        summary.push_str(&format!(
            "• **Scatter plot:** {} vs {} to see correlations\n",
            profile.numeric_columns[0], profile.numeric_columns[1]
        ));
        summary.push_str("• **Line chart:** For time-series data if you have date columns\n");
    }
    if !profile.categorical_columns.is_empty() && !profile.numeric_columns.is_empty() {
        summary.push_str(&format!(
            "• **Bar chart:** {} (x-axis) vs {} (y-axis)\n",
            profile.categorical_columns[0], profile.numeric_columns[0]
        ));
        summary.push_str(&format!(
            "• **Pie chart:** Distribution of {}\n",
            profile.categorical_columns[0]
        ));
    }
    if !profile.numeric_columns.is_empty() {
        summary.push_str(&format!(
            "• **Histogram:** Distribution of {}\n",
            profile.numeric_columns[0]
        ));
    }

    summary
}

/// Render chart recommendations for a profiled dataset, grouped by the
/// kind of question each chart answers.
pub fn visualization_advice(profile: &DatasetProfile) -> String {
    let mut advice = String::from("📊 **Visualization Recommendations:**\n\n");
    let numeric = &profile.numeric_columns;
    let categorical = &profile.categorical_columns;

    if numeric.len() >= 2 {
        advice.push_str("**For Correlations:**\n");
        advice.push_str(&format!(
            "• Scatter plot: {} (x) vs {} (y)\n",
            numeric[0], numeric[1]
        ));
        if numeric.len() > 2 {
            advice.push_str(&format!(
                "• Multi-variable scatter: Try {} as size/color\n",
                numeric[2]
            ));
        }
    }

    if !categorical.is_empty() && !numeric.is_empty() {
        advice.push_str("\n**For Categories vs Numbers:**\n");
        advice.push_str(&format!(
            "• Bar chart: {} (x) vs {} (y)\n",
            categorical[0], numeric[0]
        ));
        advice.push_str(&format!("• Pie chart: Distribution of {}\n", categorical[0]));
    }

    if !numeric.is_empty() {
        advice.push_str("\n**For Distribution Analysis:**\n");
        for column in numeric.iter().take(2) {
            advice.push_str(&format!("• Histogram: Distribution of {}\n", column));
        }
    }

    // Date-like columns are recognized by name
    let date_columns: Vec<&String> = profile
        .columns
        .iter()
        .filter(|column| {
            let lower = column.to_lowercase();
            lower.contains("date") || lower.contains("time") || lower.contains("year")
        })
        .collect();
    if !date_columns.is_empty() && !numeric.is_empty() {
        advice.push_str("\n**For Time Series:**\n");
        advice.push_str(&format!(
            "• Line chart: {} (x) vs {} (y)\n",
            date_columns[0], numeric[0]
        ));
    }

    advice
}
