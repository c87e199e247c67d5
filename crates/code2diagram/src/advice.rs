//! Canned issues and recommendations.
//!
//! The messages come from fixed tables. Issues are gated by substring checks
//! on the lowercased source text and by the report's counts; there is no
//! real security or design analysis behind them.

use code2diagram_core::report::AnalysisReport;

use crate::config::AdviceConfig;

const SQL_MARKERS: &[&str] = &["select *", "insert into"];
const SECRET_MARKERS: &[&str] = &["password", "secret", "token"];

const SQL_INJECTION: &str = "Possible SQL injection vulnerability";
const SENSITIVE_DATA: &str = "Possible exposure of sensitive information";
const MANY_DEPENDENCIES: &str = "High number of external dependencies";
const PROCEDURAL_CODE: &str = "Procedural code detected - consider using classes";
const NO_ISSUES: &str = "No critical issues detected";

const USE_LIBRARIES: &str = "Consider using external libraries for common functionality";
const MODULARIZE: &str = "Many classes detected - consider modularizing the code";
const ALWAYS_RECOMMENDED: &[&str] = &[
    "Implement error handling with try/catch",
    "Use environment variables for sensitive configuration",
    "Consider adding automated tests",
    "Document the main functions and classes",
];

/// Issues and recommendations for one analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advice {
    issues: Vec<String>,
    recommendations: Vec<String>,
}

impl Advice {
    /// Issues in table order. Never empty.
    pub fn issues(&self) -> &[String] {
        &self.issues
    }

    /// Recommendations in table order. Never empty.
    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }
}

/// Builds the advice for `text` and its `report`.
///
/// The SQL and secret keyword checks scan the submitted `text`, not the
/// serialized report; only the count checks read `report`.
pub fn advise(text: &str, report: &AnalysisReport, config: &AdviceConfig) -> Advice {
    Advice {
        issues: detect_issues(text, report, config),
        recommendations: recommend(report, config),
    }
}

fn detect_issues(text: &str, report: &AnalysisReport, config: &AdviceConfig) -> Vec<String> {
    let lowered = text.to_lowercase();
    let contains_any = |markers: &[&str]| markers.iter().any(|m| lowered.contains(m));
    let summary = report.summary();

    let mut issues = Vec::new();
    if contains_any(SQL_MARKERS) {
        issues.push(SQL_INJECTION);
    }
    if contains_any(SECRET_MARKERS) {
        issues.push(SENSITIVE_DATA);
    }
    if summary.dependency_count() > config.max_dependencies() {
        issues.push(MANY_DEPENDENCIES);
    }
    if summary.class_count() == 0
        && summary.function_count() > config.procedural_function_threshold()
    {
        issues.push(PROCEDURAL_CODE);
    }
    if issues.is_empty() {
        issues.push(NO_ISSUES);
    }

    issues.into_iter().map(str::to_string).collect()
}

fn recommend(report: &AnalysisReport, config: &AdviceConfig) -> Vec<String> {
    let summary = report.summary();

    let mut recommendations = Vec::new();
    if summary.dependency_count() == 0 {
        recommendations.push(USE_LIBRARIES);
    }
    if summary.class_count() > config.max_classes() {
        recommendations.push(MODULARIZE);
    }
    recommendations.extend_from_slice(ALWAYS_RECOMMENDED);

    recommendations.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use code2diagram_core::report::Summary;

    use super::*;

    fn report(classes: usize, functions: usize, deps: usize) -> AnalysisReport {
        AnalysisReport::new(
            Summary::new(classes, functions, deps, 1),
            (0..deps).map(|i| format!("dep{i}")).collect(),
            "graph TD\n".to_string(),
            String::new(),
        )
    }

    #[test]
    fn test_clean_code_has_no_issues() {
        let advice = advise("class A {}", &report(1, 0, 1), &AdviceConfig::default());
        assert_eq!(advice.issues(), [NO_ISSUES]);
        assert_eq!(advice.recommendations(), ALWAYS_RECOMMENDED);
    }

    #[test]
    fn test_substring_issues_are_case_insensitive() {
        let text = "db.query('SELECT * FROM users'); const API_TOKEN = 'x';";
        let advice = advise(text, &report(1, 0, 1), &AdviceConfig::default());
        assert_eq!(advice.issues(), [SQL_INJECTION, SENSITIVE_DATA]);
    }

    #[test]
    fn test_keywords_come_from_text_not_report() {
        let with_token_dep = AnalysisReport::new(
            Summary::new(1, 0, 1, 1),
            vec!["token-store".to_string()],
            "graph TD\n    token_store[token-store]\n".to_string(),
            String::new(),
        );
        let advice = advise("class A {}", &with_token_dep, &AdviceConfig::default());
        assert_eq!(advice.issues(), [NO_ISSUES]);

        let advice = advise("let password;", &report(1, 0, 1), &AdviceConfig::default());
        assert_eq!(advice.issues(), [SENSITIVE_DATA]);
    }

    #[test]
    fn test_count_issues_respect_thresholds() {
        let config = AdviceConfig::default();

        let at_limit = advise("", &report(0, 5, 10), &config);
        assert_eq!(at_limit.issues(), [NO_ISSUES]);

        let over = advise("", &report(0, 6, 11), &config);
        assert_eq!(over.issues(), [MANY_DEPENDENCIES, PROCEDURAL_CODE]);
    }

    #[test]
    fn test_recommendations_order() {
        let advice = advise("", &report(6, 0, 0), &AdviceConfig::default());
        let recs = advice.recommendations();
        assert_eq!(recs[0], USE_LIBRARIES);
        assert_eq!(recs[1], MODULARIZE);
        assert_eq!(&recs[2..], ALWAYS_RECOMMENDED);
    }

    #[test]
    fn test_custom_thresholds() {
        let config = AdviceConfig::new(1, 1, 0);
        let advice = advise("", &report(0, 1, 2), &config);
        assert_eq!(advice.issues(), [MANY_DEPENDENCIES, PROCEDURAL_CODE]);
    }
}
