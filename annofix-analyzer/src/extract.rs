use annofix_types::issue::Issue;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Substring identifying the one lint this tool fixes.
pub const MARKER: &str = "annotate_overrides";

static LOCATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\S+\.dart):(\d+):(\d+)").expect("location pattern compiles"));

/// Extract issues from analyzer output, in emission order.
///
/// Lines without the marker are ignored. Marker lines without a parseable
/// `path:line:col` location are dropped without error: a diagnostic we
/// cannot place is a line we must not touch.
pub fn extract_issues(output: &str) -> Vec<Issue> {
    output
        .lines()
        .filter(|line| line.contains(MARKER))
        .filter_map(parse_marker_line)
        .collect()
}

fn parse_marker_line(line: &str) -> Option<Issue> {
    let Some(caps) = LOCATION.captures(line) else {
        debug!(line, "marker line without location, dropping");
        return None;
    };

    let path = caps.get(1)?.as_str();
    let line_no = caps.get(2)?.as_str().parse().ok()?;
    let column = caps.get(3)?.as_str().parse().ok()?;
    Some(Issue::new(path, line_no, column))
}
