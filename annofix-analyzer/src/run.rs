use anyhow::Context;
use camino::Utf8Path;
use std::process::Command;
use tracing::debug;

/// The analyzer executable.
pub const ANALYZER_BIN: &str = "flutter";

/// The fixed subcommand. No extra flags: the stdout text is the whole
/// contract.
pub const ANALYZER_SUBCOMMAND: &str = "analyze";

/// Run the analyzer synchronously and return its stdout in full.
///
/// The exit status is deliberately ignored: `flutter analyze` exits
/// non-zero exactly when it reports issues, which is the case this tool
/// exists for. Failing to launch the tool at all is fatal and propagates.
pub fn capture_analysis(workdir: &Utf8Path) -> anyhow::Result<String> {
    let output = Command::new(ANALYZER_BIN)
        .arg(ANALYZER_SUBCOMMAND)
        .current_dir(workdir)
        .output()
        .with_context(|| format!("run `{ANALYZER_BIN} {ANALYZER_SUBCOMMAND}` in {workdir}"))?;

    debug!(status = %output.status, stdout_bytes = output.stdout.len(), "analyzer finished");

    String::from_utf8(output.stdout).context("analyzer emitted non-UTF-8 output")
}

/// Re-run the analyzer with inherited stdio so its report streams straight
/// to the console. The status is discarded; this pass exists only so the
/// reader can see what is left.
pub fn stream_analysis(workdir: &Utf8Path) -> anyhow::Result<()> {
    let status = Command::new(ANALYZER_BIN)
        .arg(ANALYZER_SUBCOMMAND)
        .current_dir(workdir)
        .status()
        .with_context(|| format!("run `{ANALYZER_BIN} {ANALYZER_SUBCOMMAND}` in {workdir}"))?;

    debug!(status = %status, "verification pass finished");
    Ok(())
}
