use log::{debug, trace};

use code2diagram_core::extraction::ExtractionResult;

use crate::patterns::{CLASS_DECL, DEPENDENCY, FUNCTION_DECL};

/// Runs the shallow structural scan over `text`.
///
/// Counts non-overlapping class and function-like declarations and collects
/// every `require`/`from` specifier in match order. Never fails: any input,
/// including the empty string, yields a valid result.
pub fn extract(text: &str) -> ExtractionResult {
    let class_count = CLASS_DECL.find_iter(text).count();
    let function_count = FUNCTION_DECL.find_iter(text).count();
    let raw_dependencies: Vec<String> = DEPENDENCY
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|path| path.as_str().to_string())
        .collect();

    debug!(
        class_count,
        function_count,
        dependency_matches = raw_dependencies.len();
        "Shallow scan finished"
    );
    trace!(raw_dependencies:?; "Raw dependency specifiers");

    ExtractionResult::new(class_count, function_count, raw_dependencies)
}
