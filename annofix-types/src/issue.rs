use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// A single `annotate_overrides` diagnostic extracted from analyzer output.
///
/// Issues are kept in analyzer emission order and are not deduplicated;
/// the extractor reports what the analyzer said, the patcher decides what
/// is actually applicable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Source path as printed by the analyzer (usually repo-relative).
    pub path: Utf8PathBuf,

    /// 1-based line number of the declaration missing the annotation.
    pub line: u64,

    /// 1-based column number. Carried through for completeness; the
    /// patcher operates on whole lines and never consults it.
    pub column: u64,
}

impl Issue {
    pub fn new(path: impl Into<Utf8PathBuf>, line: u64, column: u64) -> Self {
        Self {
            path: path.into(),
            line,
            column,
        }
    }
}
