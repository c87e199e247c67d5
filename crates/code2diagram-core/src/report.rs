//! Serializable analysis report.
//!
//! The JSON shape is fixed:
//!
//! ```json
//! {
//!   "summary": { "classCount": 0, "functionCount": 0, "dependencyCount": 0, "totalLines": 1 },
//!   "dependencies": [],
//!   "diagram": "graph TD\n",
//!   "warning": "..."
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Numeric summary of an analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    class_count: usize,
    function_count: usize,
    dependency_count: usize,
    total_lines: usize,
}

impl Summary {
    /// Creates a new summary.
    pub fn new(
        class_count: usize,
        function_count: usize,
        dependency_count: usize,
        total_lines: usize,
    ) -> Self {
        Self {
            class_count,
            function_count,
            dependency_count,
            total_lines,
        }
    }

    pub fn class_count(&self) -> usize {
        self.class_count
    }

    pub fn function_count(&self) -> usize {
        self.function_count
    }

    /// Number of unique dependencies.
    pub fn dependency_count(&self) -> usize {
        self.dependency_count
    }

    pub fn total_lines(&self) -> usize {
        self.total_lines
    }
}

/// Result of analyzing one submission.
///
/// Built once per analysis and handed back to the caller; nothing is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    summary: Summary,
    dependencies: Vec<String>,
    diagram: String,
    warning: String,
}

impl AnalysisReport {
    /// Creates a new report.
    pub fn new(
        summary: Summary,
        dependencies: Vec<String>,
        diagram: String,
        warning: String,
    ) -> Self {
        Self {
            summary,
            dependencies,
            diagram,
            warning,
        }
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Unique dependency specifiers in first-seen order.
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Mermaid flowchart text.
    pub fn diagram(&self) -> &str {
        &self.diagram
    }

    /// Caveat about the depth of the analysis.
    pub fn warning(&self) -> &str {
        &self.warning
    }
}
