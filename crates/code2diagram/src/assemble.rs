use code2diagram_core::{
    extraction::ExtractionResult,
    flowchart::Flowchart,
    report::{AnalysisReport, Summary},
};

/// The only language the scan patterns were written for.
pub const SUPPORTED_LANGUAGE: &str = "javascript";

/// Caveat attached when the declared language is the supported one or absent.
pub const BASIC_ANALYSIS_WARNING: &str =
    "Basic analysis - full analysis requires all optional dependencies to be installed";

/// Caveat attached when another language is declared.
pub fn limited_analysis_warning(language: &str) -> String {
    format!(
        "Full analysis is only available for JavaScript. Using basic analysis for {language}"
    )
}

/// Packages the stage outputs into a report.
///
/// `dependencyCount` in the summary is the length of `normalized`, not of
/// the raw matches.
pub fn assemble(
    extraction: &ExtractionResult,
    normalized: Vec<String>,
    diagram: &Flowchart,
    declared_language: Option<&str>,
    total_lines: usize,
) -> AnalysisReport {
    let summary = Summary::new(
        extraction.class_count(),
        extraction.function_count(),
        normalized.len(),
        total_lines,
    );

    let warning = match declared_language {
        Some(language) if language != SUPPORTED_LANGUAGE => limited_analysis_warning(language),
        _ => BASIC_ANALYSIS_WARNING.to_string(),
    };

    AnalysisReport::new(summary, normalized, diagram.to_string(), warning)
}
