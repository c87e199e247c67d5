//! Compiled patterns for the shallow structural scan.
//!
//! `\w` is written as `(?-u:\w)` so identifiers are ASCII-only, matching the
//! JavaScript regex dialect the patterns come from.

use std::sync::LazyLock;

use regex::Regex;

/// `class` keyword followed by an identifier.
pub(crate) static CLASS_DECL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"class\s+(?-u:\w)+"));

/// Named function declarations and `const|let|var name = (` bindings.
pub(crate) static FUNCTION_DECL: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"function\s+(?-u:\w)+",
        r"|const\s+(?-u:\w)+\s*=\s*\(",
        r"|let\s+(?-u:\w)+\s*=\s*\(",
        r"|var\s+(?-u:\w)+\s*=\s*\(",
    ))
});

/// `require("…")` calls and `from "…"` clauses.
///
/// Group 1 holds the path of a `require` call, group 2 that of a `from`
/// clause. Opening and closing quotes may differ.
pub(crate) static DEPENDENCY: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r#"require\(['"]([^'"]+)['"]\)"#,
        r#"|from\s+['"]([^'"]+)['"]"#,
    ))
});

fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("invalid built-in pattern {pattern:?}: {err}"),
    }
}
