use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Grouped fix work for one run.
///
/// Files appear in first-seen order from the issue sequence. Line numbers
/// within a file are sorted descending and are not deduplicated: inserting
/// at position L never invalidates a pending insertion at any position
/// below L, so applying the stored order top-of-file-last is what keeps
/// every recorded line number valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixPlan {
    #[serde(default)]
    pub files: Vec<FileFixes>,

    pub summary: PlanSummary,
}

impl FixPlan {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Insertion lines for a single file, sorted descending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFixes {
    pub path: Utf8PathBuf,
    pub lines: Vec<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub issues_total: u64,
    pub files_touched: u64,
}
