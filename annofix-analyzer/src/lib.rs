//! Analyzer ingestion for annofix.
//!
//! annofix consumes the human-readable output of `flutter analyze`. It is
//! intentionally *tolerant*: only lines carrying the `annotate_overrides`
//! marker are considered, and marker lines without a parseable location
//! are dropped rather than failing the run. The analyzer's console text is
//! not a stable format; being useful with output "as found" beats strict
//! validation here.

mod extract;
mod run;

pub use extract::{MARKER, extract_issues};
pub use run::{ANALYZER_BIN, ANALYZER_SUBCOMMAND, capture_analysis, stream_analysis};
