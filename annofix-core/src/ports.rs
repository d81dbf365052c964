//! Port traits abstracting the process seam away from the pipeline.

/// Source of analyzer output.
pub trait AnalyzerSource {
    /// Run the analyzer to completion and return its stdout in full.
    fn capture(&self) -> anyhow::Result<String>;

    /// Re-run the analyzer with output streaming to the console. The
    /// analysis result is discarded; only the side effect matters.
    fn verify(&self) -> anyhow::Result<()>;
}
