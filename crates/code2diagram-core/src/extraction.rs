//! Raw output of the shallow structural scan.

/// Counts and dependency specifiers found in a piece of source text.
///
/// The values are approximations: they come from regular expressions, not
/// from parsing. `raw_dependencies` keeps every match in source order,
/// duplicates included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    class_count: usize,
    function_count: usize,
    raw_dependencies: Vec<String>,
}

impl ExtractionResult {
    /// Creates a new extraction result.
    pub fn new(class_count: usize, function_count: usize, raw_dependencies: Vec<String>) -> Self {
        Self {
            class_count,
            function_count,
            raw_dependencies,
        }
    }

    /// Number of class declarations matched.
    pub fn class_count(&self) -> usize {
        self.class_count
    }

    /// Number of function-like declarations matched.
    pub fn function_count(&self) -> usize {
        self.function_count
    }

    /// Dependency specifiers in match order, possibly with duplicates.
    pub fn raw_dependencies(&self) -> &[String] {
        &self.raw_dependencies
    }
}
