use super::super::domain::ResolutionPath;
use super::super::resolver::Resolution;

pub const SUMMARY_TITLE: &str = "Time-Driven Normative Model — Decision Summary";
pub const ATTRIBUTION: &str =
    "Attribution: Educational implementation of Vroom’s Normative Model (Time-Driven, 2022). Not affiliated.";

const NOT_AVAILABLE: &str = "(not available)";

/// `Factor=High|Low` pairs, comma-joined in path order.
pub fn format_path(path: &ResolutionPath) -> String {
    path.to_string()
}

/// Builds the shareable plain-text summary for a resolution.
///
/// Incomplete or invalid resolutions still render, with placeholders in
/// place of the style, path and next step.
pub fn format_summary(resolution: &Resolution, problem: &str) -> String {
    let decision_line = if problem.trim().is_empty() {
        "Decision: (not provided)".to_string()
    } else {
        format!("Decision: {problem}")
    };

    let style = resolution.style();
    let process_line = format!(
        "Recommended process: {}",
        style.map(|style| style.title()).unwrap_or(NOT_AVAILABLE)
    );

    let path = match resolution {
        Resolution::Complete { path, .. } if !path.is_empty() => format_path(path),
        _ => NOT_AVAILABLE.to_string(),
    };
    let path_line = format!("Path taken: {path}");

    let next_step_line = match style {
        Some(style) => format!("Suggested next step: {}", style.next_step()),
        None => "Suggested next step: (see app)".to_string(),
    };

    [
        SUMMARY_TITLE.to_string(),
        decision_line,
        process_line,
        path_line,
        next_step_line,
        String::new(),
        ATTRIBUTION.to_string(),
    ]
    .join("\n")
}
