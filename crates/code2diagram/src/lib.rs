//! Code2Diagram - turn source code into a Mermaid flowchart.
//!
//! A shallow structural scan counts classes and function-like declarations
//! and collects `require`/`from` dependency specifiers. The counts are then
//! rendered as a top-down flowchart linking every class to every dependency,
//! and packaged with a short caveat into an [`AnalysisReport`].
//!
//! With the `github` feature, [`github::RepoFetcher`] downloads the script
//! files at the root of a GitHub repository so they can be analyzed too.

pub mod advice;
pub mod config;
#[cfg(feature = "github")]
pub mod github;

mod assemble;
mod diagram;
mod error;

pub use code2diagram_core::{extraction, flowchart, report, submission};

pub use advice::Advice;
pub use assemble::{BASIC_ANALYSIS_WARNING, SUPPORTED_LANGUAGE, limited_analysis_warning};
pub use diagram::build_diagram;
pub use error::Code2DiagramError;

use std::panic::{self, AssertUnwindSafe};

use log::{debug, info, trace};

use config::AppConfig;
use report::AnalysisReport;
use submission::CodeSubmission;

/// Runs the analysis pipeline over code submissions.
///
/// # Examples
///
/// ```rust
/// use code2diagram::{Analyzer, submission::CodeSubmission};
///
/// let submission = CodeSubmission::new(
///     "const _ = require('lodash');\nclass A {}\nclass B {}",
/// )
/// .with_language("javascript");
///
/// let analyzer = Analyzer::default();
/// let report = analyzer.analyze(&submission).expect("Failed to analyze");
///
/// assert_eq!(report.summary().class_count(), 2);
/// assert_eq!(report.dependencies(), ["lodash"]);
/// assert!(report.diagram().starts_with("graph TD\n"));
///
/// let advice = analyzer.advise(&submission, &report);
/// assert!(!advice.recommendations().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct Analyzer {
    config: AppConfig,
}

impl Analyzer {
    /// Create a new analyzer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the analyzer configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Analyze a submission into a report.
    ///
    /// Scans the text, deduplicates the dependencies, builds the flowchart
    /// and attaches the caveat for the declared language.
    ///
    /// # Errors
    ///
    /// Returns [`Code2DiagramError::EmptySubmission`] if the text is blank,
    /// and [`Code2DiagramError::Analysis`] if the pipeline fails
    /// unexpectedly.
    ///
    /// # Panics
    ///
    /// Never unwinds to the caller. A panic inside the pipeline is caught and
    /// returned as [`Code2DiagramError::Analysis`], but the process panic hook
    /// still runs first; a binary that installs a reporting hook (such as
    /// `miette::set_panic_hook`) will print that report before the error is
    /// returned.
    pub fn analyze(&self, submission: &CodeSubmission) -> Result<AnalysisReport, Code2DiagramError> {
        if submission.is_blank() {
            return Err(Code2DiagramError::EmptySubmission);
        }

        info!(
            bytes = submission.text().len(),
            language = submission.declared_language().unwrap_or("unspecified");
            "Analyzing code"
        );

        let report = guarded(|| run_pipeline(submission))?;

        info!(
            classes = report.summary().class_count(),
            functions = report.summary().function_count(),
            dependencies = report.summary().dependency_count();
            "Analysis complete"
        );
        trace!(report:?; "Analysis report");

        Ok(report)
    }

    /// Canned issues and recommendations for an analyzed submission.
    pub fn advise(&self, submission: &CodeSubmission, report: &AnalysisReport) -> Advice {
        advice::advise(submission.text(), report, self.config.advice())
    }
}

fn run_pipeline(submission: &CodeSubmission) -> AnalysisReport {
    let extraction = code2diagram_scan::extract(submission.text());
    let dependencies = code2diagram_scan::normalize(extraction.raw_dependencies());
    debug!(
        raw = extraction.raw_dependencies().len(),
        unique = dependencies.len();
        "Dependencies normalized"
    );

    let chart = build_diagram(extraction.class_count(), &dependencies);

    assemble::assemble(
        &extraction,
        dependencies,
        &chart,
        submission.declared_language(),
        submission.total_lines(),
    )
}

/// Runs `f`, turning a panic into [`Code2DiagramError::Analysis`].
fn guarded<T>(f: impl FnOnce() -> T) -> Result<T, Code2DiagramError> {
    panic::catch_unwind(AssertUnwindSafe(f))
        .map_err(|payload| Code2DiagramError::Analysis(panic_reason(&*payload)))
}

fn panic_reason(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown failure".to_string())
}
