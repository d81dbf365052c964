use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a reported line was skipped instead of patched.
///
/// These are anticipated conditions, carried as data rather than raised:
/// the run continues with the next line and exits successfully.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// The analyzer named a file that is not on disk.
    #[error("file not found")]
    FileNotFound,

    /// The reported line is outside `[1, total_lines]`.
    #[error("invalid line number {line} (file has {total} lines)")]
    InvalidLine { line: u64, total: u64 },

    /// The line above the target already carries the annotation; the
    /// analyzer report is stale or duplicated.
    #[error("@override already present")]
    AlreadyAnnotated,
}

/// Outcome of one insertion attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PatchOutcome {
    Fixed,
    Skipped { reason: SkipReason },
}

impl PatchOutcome {
    pub fn is_fixed(&self) -> bool {
        matches!(self, PatchOutcome::Fixed)
    }
}

/// One attempted insertion, in processing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineFix {
    pub path: Utf8PathBuf,
    pub line: u64,
    pub outcome: PatchOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixSummary {
    /// Issues extracted from the analyzer run.
    pub issues_total: u64,
    /// Insertions attempted (equals `issues_total`; nothing is filtered
    /// before the patcher's guards).
    pub attempted: u64,
    pub fixed: u64,
    pub skipped: u64,
}
