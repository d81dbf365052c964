//! Rendering helpers (console text) for human-readable progress output.
//!
//! Everything here is for humans; none of it is a stable format. Tooling
//! should use `annofix scan --format json` instead.

use annofix_types::issue::Issue;
use annofix_types::outcome::{FixSummary, LineFix, PatchOutcome};

pub fn render_scan_text(issues: &[Issue]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Found {} missing @override annotations\n",
        issues.len()
    ));
    for issue in issues {
        out.push_str(&format!(
            "  {}:{}:{}\n",
            issue.path, issue.line, issue.column
        ));
    }
    out
}

/// Render per-line fix results in processing order, with a header per
/// file and the run's totals.
pub fn render_fix_text(results: &[LineFix], summary: &FixSummary) -> String {
    render_results(results, summary, false)
}

/// Render dry-run results: same shape as [`render_fix_text`] but in the
/// conditional voice, since nothing was written.
pub fn render_preview_text(results: &[LineFix], summary: &FixSummary) -> String {
    render_results(results, summary, true)
}

fn render_results(results: &[LineFix], summary: &FixSummary, preview: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Found {} missing @override annotations\n",
        summary.issues_total
    ));

    let mut current: Option<&str> = None;
    for result in results {
        if current != Some(result.path.as_str()) {
            out.push_str(&format!("\nProcessing {}\n", result.path));
            current = Some(result.path.as_str());
        }
        match &result.outcome {
            PatchOutcome::Fixed => {
                let verb = if preview { "would add" } else { "added" };
                out.push_str(&format!(
                    "  {verb} @override before line {}\n",
                    result.line
                ));
            }
            PatchOutcome::Skipped { reason } => {
                out.push_str(&format!("  skipped line {}: {}\n", result.line, reason));
            }
        }
    }

    let label = if preview { "Would fix" } else { "Fixed" };
    out.push_str(&format!(
        "\n{label} {} @override annotations\n",
        summary.fixed
    ));
    out
}
