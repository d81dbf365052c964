//! Line-insertion engine for annofix plans.
//!
//! Responsibilities:
//! - Insert the annotation above a reported line, cloning its indentation.
//! - Guard against missing files and stale or out-of-range analyzer
//!   reports (soft skips, never hard failures).
//! - Apply a whole plan to disk, or preview it as a unified diff.
//!
//! Plans must be consumed in their stored order: files as planned, lines
//! descending within a file. Inserting at line L shifts only lines at or
//! below L, so every pending insertion above stays valid.

use annofix_types::ANNOTATION;
use annofix_types::outcome::{LineFix, PatchOutcome, SkipReason};
use annofix_types::plan::FixPlan;
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use diffy::PatchFormatter;
use fs_err as fs;
use std::collections::BTreeMap;
use tracing::debug;

/// Result of the pure content transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// New file content with the annotation inserted above the target line.
    Patched(String),
    Skipped(SkipReason),
}

/// Insert `indent + "@override"` immediately above `line` (1-based).
///
/// Existing lines keep their original terminators byte-for-byte; the
/// inserted line always ends with `\n`. The indent is the target line's
/// leading run of spaces and tabs, empty if none.
pub fn insert_annotation(content: &str, line: u64) -> InsertOutcome {
    let lines: Vec<&str> = content.split_inclusive('\n').collect();
    let total = lines.len() as u64;

    if line < 1 || line > total {
        return InsertOutcome::Skipped(SkipReason::InvalidLine { line, total });
    }
    let idx = (line - 1) as usize;

    // The analyzer is sometimes stale; never stack a second annotation.
    if idx > 0 && lines[idx - 1].trim() == ANNOTATION {
        return InsertOutcome::Skipped(SkipReason::AlreadyAnnotated);
    }

    let indent: String = lines[idx]
        .chars()
        .take_while(|c| matches!(c, ' ' | '\t'))
        .collect();

    let mut out = String::with_capacity(content.len() + indent.len() + ANNOTATION.len() + 1);
    for (i, l) in lines.iter().enumerate() {
        if i == idx {
            out.push_str(&indent);
            out.push_str(ANNOTATION);
            out.push('\n');
        }
        out.push_str(l);
    }
    InsertOutcome::Patched(out)
}

/// Fix a single reported line on disk.
///
/// The file is read whole, patched in memory, and rewritten whole — one
/// rewrite per fixed line, no backup. A missing file is a guard, not an
/// error; I/O faults on a file that exists propagate.
pub fn fix_line(repo_root: &Utf8Path, path: &Utf8Path, line: u64) -> anyhow::Result<PatchOutcome> {
    let abs = abs_path(repo_root, path);
    if !abs.exists() {
        return Ok(PatchOutcome::Skipped {
            reason: SkipReason::FileNotFound,
        });
    }

    let content = fs::read_to_string(&abs).with_context(|| format!("read {abs}"))?;
    match insert_annotation(&content, line) {
        InsertOutcome::Patched(patched) => {
            fs::write(&abs, patched).with_context(|| format!("write {abs}"))?;
            Ok(PatchOutcome::Fixed)
        }
        InsertOutcome::Skipped(reason) => Ok(PatchOutcome::Skipped { reason }),
    }
}

/// Apply every planned insertion to disk.
///
/// Returns per-line results in processing order: plan file order, lines
/// descending within each file.
pub fn apply_plan(repo_root: &Utf8Path, plan: &FixPlan) -> anyhow::Result<Vec<LineFix>> {
    let mut results = Vec::new();
    for file in &plan.files {
        debug!(path = file.path.as_str(), fixes = file.lines.len(), "patching file");
        for &line in &file.lines {
            let outcome = fix_line(repo_root, &file.path, line)?;
            results.push(LineFix {
                path: file.path.clone(),
                line,
                outcome,
            });
        }
    }
    Ok(results)
}

/// Dry-run a plan entirely in memory and render the would-be changes as a
/// unified diff. Nothing is written; guard outcomes match a real apply.
pub fn preview_plan(
    repo_root: &Utf8Path,
    plan: &FixPlan,
) -> anyhow::Result<(Vec<LineFix>, String)> {
    let mut before: BTreeMap<Utf8PathBuf, String> = BTreeMap::new();
    let mut after: BTreeMap<Utf8PathBuf, String> = BTreeMap::new();
    let mut results = Vec::new();

    for file in &plan.files {
        let abs = abs_path(repo_root, &file.path);
        if !after.contains_key(&file.path) {
            if !abs.exists() {
                for &line in &file.lines {
                    results.push(LineFix {
                        path: file.path.clone(),
                        line,
                        outcome: PatchOutcome::Skipped {
                            reason: SkipReason::FileNotFound,
                        },
                    });
                }
                continue;
            }
            let content = fs::read_to_string(&abs).with_context(|| format!("read {abs}"))?;
            before.insert(file.path.clone(), content.clone());
            after.insert(file.path.clone(), content);
        }

        for &line in &file.lines {
            let content = after.get(&file.path).cloned().unwrap_or_default();
            let outcome = match insert_annotation(&content, line) {
                InsertOutcome::Patched(patched) => {
                    after.insert(file.path.clone(), patched);
                    PatchOutcome::Fixed
                }
                InsertOutcome::Skipped(reason) => PatchOutcome::Skipped { reason },
            };
            results.push(LineFix {
                path: file.path.clone(),
                line,
                outcome,
            });
        }
    }

    Ok((results, render_patch(&before, &after)))
}

fn abs_path(repo_root: &Utf8Path, rel: &Utf8Path) -> Utf8PathBuf {
    if rel.is_absolute() {
        rel.to_path_buf()
    } else {
        repo_root.join(rel)
    }
}

fn render_patch(
    before: &BTreeMap<Utf8PathBuf, String>,
    after: &BTreeMap<Utf8PathBuf, String>,
) -> String {
    let mut out = String::new();
    let formatter = PatchFormatter::new();

    for (path, old) in before {
        let new = after.get(path).unwrap_or(old);
        if old == new {
            continue;
        }

        out.push_str(&format!("diff --git a/{0} b/{0}\n", path));
        out.push_str(&format!("--- a/{0}\n+++ b/{0}\n", path));

        let patch = diffy::create_patch(old, new);
        out.push_str(&formatter.fmt_patch(&patch).to_string());
        if !out.ends_with('\n') {
            out.push('\n');
        }
    }

    out
}
