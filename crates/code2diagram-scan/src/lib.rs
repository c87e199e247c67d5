//! Shallow structural scan for Code2Diagram.
//!
//! This crate derives rough structural metrics from source text using a
//! fixed set of regular expressions. It does not tokenize or parse: the
//! patterns target JavaScript-style declarations and module specifiers and
//! are applied to any text regardless of its language.
//!
//! # Known blind spots
//!
//! - Method shorthand (`run() {}`), class fields and object-literal functions
//!   are not counted as functions.
//! - Any `const x = (` binding counts as a function, arrow or not.
//! - Keywords are not word-anchored: `myfunction go` counts as a function and
//!   `subclass Foo` as a class.
//! - Matches inside comments and string literals are counted.
//! - Dynamic `import("x")` and bare `import "x"` are not dependencies.
//!
//! These are accepted approximations, pinned by tests.
//!
//! # Example
//!
//! ```
//! use code2diagram_scan::{extract, normalize};
//!
//! let source = r#"
//!     const _ = require("lodash");
//!     const fp = require("lodash");
//!     class Foo {}
//! "#;
//!
//! let extraction = extract(source);
//! assert_eq!(extraction.class_count(), 1);
//! assert_eq!(extraction.raw_dependencies(), ["lodash", "lodash"]);
//! assert_eq!(normalize(extraction.raw_dependencies()), ["lodash"]);
//! ```

mod extract;
mod normalize;
mod patterns;

pub use extract::extract;
pub use normalize::normalize;
