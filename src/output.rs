//! CLI output formatting.
//!
//! One line per generated page showing its semantic identity (display name),
//! where it landed (output file), and how much source it came from (block
//! count), followed by any warnings and a summary line:
//!
//! ```text
//! Doc A → doc_a.html (3 blocks)
//! README → readme.html (1 block)
//! Warning: output collision: readme.html overwrites an earlier page with the same name
//! Generated 2 pages + index.html
//! ```
//!
//! The `format_*` function is pure (returns lines, no I/O) for testability;
//! the `print_*` wrapper writes to stdout.

use crate::generate::RunReport;

/// Format the run report as display lines.
pub fn format_generate_output(report: &RunReport) -> Vec<String> {
    let mut lines = Vec::new();

    for page in &report.pages {
        lines.push(format!(
            "{} → {} ({})",
            page.display_name,
            page.output_file,
            plural(page.block_count, "block")
        ));
    }

    for warning in &report.warnings {
        lines.push(format!("Warning: {warning}"));
    }

    lines.push(format!(
        "Generated {} + index.html",
        plural(report.pages.len(), "page")
    ));
    lines
}

/// Print the run report to stdout.
pub fn print_generate_output(report: &RunReport) {
    for line in format_generate_output(report) {
        println!("{line}");
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
