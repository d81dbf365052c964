//! Deterministic plan building from extracted issues.

use annofix_types::issue::Issue;
use annofix_types::plan::{FileFixes, FixPlan, PlanSummary};

/// Group issues into a [`FixPlan`].
///
/// Files keep first-seen order from the issue sequence. Lines within a
/// file are sorted descending so that applying them in stored order never
/// shifts a pending target (inserting at line L only moves lines at or
/// below L). Duplicate reports pass through untouched.
pub fn build_plan(issues: &[Issue]) -> FixPlan {
    let mut files: Vec<FileFixes> = Vec::new();

    for issue in issues {
        match files.iter_mut().find(|f| f.path == issue.path) {
            Some(entry) => entry.lines.push(issue.line),
            None => files.push(FileFixes {
                path: issue.path.clone(),
                lines: vec![issue.line],
            }),
        }
    }

    for file in &mut files {
        file.lines.sort_unstable_by(|a, b| b.cmp(a));
    }

    let summary = PlanSummary {
        issues_total: issues.len() as u64,
        files_touched: files.len() as u64,
    };

    FixPlan { files, summary }
}
