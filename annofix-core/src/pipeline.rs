//! Scan and fix pipelines, extracted from the CLI.
//!
//! These entry points are process-agnostic: the analyzer is reached only
//! through the [`AnalyzerSource`] port, so tests and embedders can inject
//! canned output. File edits go straight to disk via `annofix-edit`, the
//! same way a standalone run would do them.

use crate::plan::build_plan;
use crate::ports::AnalyzerSource;
use crate::settings::FixSettings;
use annofix_analyzer::extract_issues;
use annofix_types::issue::Issue;
use annofix_types::outcome::{FixSummary, LineFix};
use annofix_types::plan::FixPlan;
use anyhow::Context;
use tracing::debug;

/// Outcome of [`run_scan`].
pub struct ScanOutcome {
    pub issues: Vec<Issue>,
}

/// Run the analyzer and extract issues without touching any file.
pub fn run_scan(analyzer: &dyn AnalyzerSource) -> anyhow::Result<ScanOutcome> {
    let output = analyzer.capture().context("run analyzer")?;
    let issues = extract_issues(&output);
    debug!(issues = issues.len(), "scan finished");
    Ok(ScanOutcome { issues })
}

/// Outcome of [`run_fix`].
pub struct FixOutcome {
    pub plan: FixPlan,
    /// Per-line results in processing order (plan file order, lines
    /// descending within each file).
    pub results: Vec<LineFix>,
    pub summary: FixSummary,
    /// Unified diff of the would-be changes; present only on dry runs.
    pub patch: Option<String>,
}

/// Run the full fix pipeline: analyze, extract, plan, patch.
///
/// On a dry run nothing is written and `patch` carries the preview. The
/// caller is responsible for the verification pass (re-running the
/// analyzer via [`AnalyzerSource::verify`]) after reporting results.
pub fn run_fix(settings: &FixSettings, analyzer: &dyn AnalyzerSource) -> anyhow::Result<FixOutcome> {
    let output = analyzer.capture().context("run analyzer")?;
    let issues = extract_issues(&output);
    let plan = build_plan(&issues);
    debug!(
        issues = issues.len(),
        files = plan.files.len(),
        dry_run = settings.dry_run,
        "built fix plan"
    );

    let (results, patch) = if settings.dry_run {
        let (results, patch) =
            annofix_edit::preview_plan(&settings.repo_root, &plan).context("preview plan")?;
        (results, Some(patch))
    } else {
        let results =
            annofix_edit::apply_plan(&settings.repo_root, &plan).context("apply plan")?;
        (results, None)
    };

    let summary = summarize(&plan, &results);
    Ok(FixOutcome {
        plan,
        results,
        summary,
        patch,
    })
}

fn summarize(plan: &FixPlan, results: &[LineFix]) -> FixSummary {
    let fixed = results.iter().filter(|r| r.outcome.is_fixed()).count() as u64;
    FixSummary {
        issues_total: plan.summary.issues_total,
        attempted: results.len() as u64,
        fixed,
        skipped: results.len() as u64 - fixed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StaticAnalyzerSource;
    use annofix_types::outcome::{PatchOutcome, SkipReason};
    use camino::Utf8PathBuf;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn marker_line(path: &str, line: u64, column: u64) -> String {
        format!(
            "   info - Annotate overridden members - {path}:{line}:{column} - annotate_overrides\n"
        )
    }

    fn create_temp_repo(files: &[(&str, String)]) -> (TempDir, Utf8PathBuf) {
        let td = tempfile::tempdir().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(td.path().to_path_buf()).expect("utf8 tempdir");
        for (name, content) in files {
            fs::write(root.join(name), content).expect("write fixture");
        }
        (td, root)
    }

    fn numbered_file(lines: usize) -> String {
        (1..=lines).map(|i| format!("  member {i}\n")).collect()
    }

    #[test]
    fn scan_extracts_in_emission_order() {
        let output = format!(
            "{}{}",
            marker_line("b.dart", 9, 1),
            marker_line("a.dart", 3, 2)
        );
        let analyzer = StaticAnalyzerSource::new(output);

        let outcome = run_scan(&analyzer).expect("run_scan");
        assert_eq!(
            outcome.issues,
            vec![Issue::new("b.dart", 9, 1), Issue::new("a.dart", 3, 2)]
        );
    }

    #[test]
    fn fix_patches_two_lines_in_one_file() {
        let (_td, root) = create_temp_repo(&[("a.dart", numbered_file(25))]);
        let output = format!(
            "Analyzing app...\n{}{}2 issues found.\n",
            marker_line("a.dart", 10, 3),
            marker_line("a.dart", 20, 5)
        );
        let analyzer = StaticAnalyzerSource::new(output);
        let settings = FixSettings {
            repo_root: root.clone(),
            dry_run: false,
        };

        let outcome = run_fix(&settings, &analyzer).expect("run_fix");
        assert_eq!(outcome.summary.issues_total, 2);
        assert_eq!(outcome.summary.fixed, 2);
        assert_eq!(outcome.summary.skipped, 0);
        assert!(outcome.patch.is_none());

        // Lines were applied descending: 20 before 10.
        assert_eq!(outcome.results[0].line, 20);
        assert_eq!(outcome.results[1].line, 10);

        let content = fs::read_to_string(root.join("a.dart")).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 27);

        let pos10 = lines.iter().position(|l| *l == "  member 10").unwrap();
        let pos20 = lines.iter().position(|l| *l == "  member 20").unwrap();
        assert_eq!(lines[pos10 - 1], "  @override");
        assert_eq!(lines[pos20 - 1], "  @override");
    }

    #[test]
    fn zero_marker_lines_touch_nothing() {
        let original = numbered_file(5);
        let (_td, root) = create_temp_repo(&[("a.dart", original.clone())]);
        let analyzer = StaticAnalyzerSource::new("Analyzing app...\nNo issues found!\n");
        let settings = FixSettings {
            repo_root: root.clone(),
            dry_run: false,
        };

        let outcome = run_fix(&settings, &analyzer).expect("run_fix");
        assert!(outcome.plan.is_empty());
        assert_eq!(outcome.summary, FixSummary::default());
        assert_eq!(fs::read_to_string(root.join("a.dart")).unwrap(), original);
    }

    #[test]
    fn dry_run_previews_without_writing() {
        let original = numbered_file(5);
        let (_td, root) = create_temp_repo(&[("a.dart", original.clone())]);
        let analyzer = StaticAnalyzerSource::new(marker_line("a.dart", 2, 3));
        let settings = FixSettings {
            repo_root: root.clone(),
            dry_run: true,
        };

        let outcome = run_fix(&settings, &analyzer).expect("run_fix");
        assert_eq!(outcome.summary.fixed, 1);

        let patch = outcome.patch.expect("dry run carries a patch");
        assert!(patch.contains("a.dart"));
        assert!(patch.contains("+  @override"));

        // Nothing written.
        assert_eq!(fs::read_to_string(root.join("a.dart")).unwrap(), original);
    }

    #[test]
    fn missing_file_surfaces_as_skip() {
        let (_td, root) = create_temp_repo(&[]);
        let analyzer = StaticAnalyzerSource::new(marker_line("ghost.dart", 4, 1));
        let settings = FixSettings {
            repo_root: root,
            dry_run: false,
        };

        let outcome = run_fix(&settings, &analyzer).expect("run_fix");
        assert_eq!(outcome.summary.skipped, 1);
        assert_eq!(outcome.summary.fixed, 0);
        assert_eq!(
            outcome.results[0].outcome,
            PatchOutcome::Skipped {
                reason: SkipReason::FileNotFound
            }
        );
    }

    #[test]
    fn malformed_marker_lines_are_ignored() {
        let (_td, root) = create_temp_repo(&[("a.dart", numbered_file(5))]);
        let output = format!(
            "info - annotate_overrides with no location\n{}",
            marker_line("a.dart", 2, 1)
        );
        let analyzer = StaticAnalyzerSource::new(output);
        let settings = FixSettings {
            repo_root: root,
            dry_run: false,
        };

        let outcome = run_fix(&settings, &analyzer).expect("run_fix");
        assert_eq!(outcome.summary.issues_total, 1);
        assert_eq!(outcome.summary.fixed, 1);
    }
}
