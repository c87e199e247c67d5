//! Rendering of analysis results in the selected [`OutputFormat`].

use serde::Serialize;

use code2diagram::{Advice, Code2DiagramError, report::AnalysisReport};

use crate::args::OutputFormat;

/// Analysis of one file fetched from a repository.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: String,
    pub language: String,
    pub report: AnalysisReport,
    #[serde(skip)]
    pub advice: Advice,
}

/// Renders a single report.
pub fn render_report(
    report: &AnalysisReport,
    advice: &Advice,
    format: OutputFormat,
) -> Result<String, Code2DiagramError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)? + "\n"),
        OutputFormat::Mermaid => Ok(report.diagram().to_string()),
        OutputFormat::Text => Ok(render_text(report, advice)),
    }
}

/// Renders the reports of a repository, one section per file.
pub fn render_repository(
    files: &[FileReport],
    format: OutputFormat,
) -> Result<String, Code2DiagramError> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(files)? + "\n");
    }

    let mut out = String::new();
    for (idx, file) in files.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(&format!("== {} ({}) ==\n", file.path, file.language));
        out.push_str(&render_report(&file.report, &file.advice, format)?);
    }
    Ok(out)
}

fn render_text(report: &AnalysisReport, advice: &Advice) -> String {
    let summary = report.summary();

    let mut out = format!(
        "Summary\n  Classes:      {}\n  Functions:    {}\n  Dependencies: {}\n  Lines:        {}\n",
        summary.class_count(),
        summary.function_count(),
        summary.dependency_count(),
        summary.total_lines(),
    );

    out.push_str("\nDependencies\n");
    if report.dependencies().is_empty() {
        out.push_str("  (no external dependencies detected)\n");
    }
    out.push_str(&bullets(report.dependencies()));

    out.push_str(&format!("\nWarning: {}\n", report.warning()));
    out.push_str(&format!("\nIssues\n{}", bullets(advice.issues())));
    out.push_str(&format!("\nRecommendations\n{}", bullets(advice.recommendations())));

    out.push_str("\nDiagram\n");
    out.push_str(report.diagram());
    out
}

fn bullets(items: &[String]) -> String {
    items.iter().map(|item| format!("  - {item}\n")).collect()
}
