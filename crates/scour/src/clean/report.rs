//! Before/after cleaning report rendering.

use crate::input::Dataset;

use super::operations::CleaningPlan;

/// Render a human-readable comparison of a dataset before and after a
/// cleaning plan ran, followed by one line per operation in plan order.
/// Light markup only (bold and bullet markers); the presentation layer
/// decides how to render it.
pub fn cleaning_report(original: &Dataset, cleaned: &Dataset, plan: &CleaningPlan) -> String {
    let mut report = String::from("**Cleaning Results:**\n");
    report.push_str(&format!("• Original rows: {}\n", original.len()));
    report.push_str(&format!("• Cleaned rows: {}\n", cleaned.len()));

    if cleaned.len() < original.len() && !original.is_empty() {
        let removed = original.len() - cleaned.len();
        let percentage = removed as f64 / original.len() as f64 * 100.0;
        report.push_str(&format!("• Rows removed: {} ({:.1}%)\n", removed, percentage));
    }

    let original_columns = original.column_count();
    let cleaned_columns = cleaned.column_count();
    if cleaned_columns < original_columns {
        report.push_str(&format!(
            "• Columns removed: {}\n",
            original_columns - cleaned_columns
        ));
    }

    report.push_str("\n**Operations Performed:**\n");
    for operation in &plan.operations {
        report.push_str(&format!("• {}\n", operation.describe()));
    }

    report
}
