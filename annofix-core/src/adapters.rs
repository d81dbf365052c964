//! Default implementations of the analyzer port.

use crate::ports::AnalyzerSource;
use camino::Utf8PathBuf;

/// Spawns the real `flutter analyze` in a working directory.
#[derive(Debug, Clone)]
pub struct FlutterAnalyzerSource {
    pub workdir: Utf8PathBuf,
}

impl FlutterAnalyzerSource {
    pub fn new(workdir: Utf8PathBuf) -> Self {
        Self { workdir }
    }
}

impl AnalyzerSource for FlutterAnalyzerSource {
    fn capture(&self) -> anyhow::Result<String> {
        annofix_analyzer::capture_analysis(&self.workdir)
    }

    fn verify(&self) -> anyhow::Result<()> {
        annofix_analyzer::stream_analysis(&self.workdir)
    }
}

/// Canned analyzer output for embedding and testing. `verify` is a no-op.
#[derive(Debug, Clone, Default)]
pub struct StaticAnalyzerSource {
    output: String,
}

impl StaticAnalyzerSource {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
        }
    }
}

impl AnalyzerSource for StaticAnalyzerSource {
    fn capture(&self) -> anyhow::Result<String> {
        Ok(self.output.clone())
    }

    fn verify(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
