//! Output formatting utilities

use crate::application::FileReport;

/// Format the end-of-run summary. `label` names the output, e.g. "Cleaned".
pub fn format_report(report: &FileReport, label: &str) -> String {
    if report.total == 0 {
        return "No output produced (empty or unreadable input); nothing written.".to_string();
    }

    let mut output = format!(
        "Total rows processed: {}\nRows updated: {}\n",
        report.total, report.updated
    );

    if report.written {
        output.push_str(&format!(
            "{} data saved to: {}",
            label,
            report.output_path.display()
        ));
    } else if report.dry_run {
        output.push_str(&format!(
            "Dry run: no file written (would save to {})",
            report.output_path.display()
        ));
    }

    output
}
