//! Directed-graph model rendered as Mermaid flowchart text.
//!
//! A [`Flowchart`] is an ordered list of [`Statement`]s under a top-down
//! header. Statements are kept in insertion order and rendered verbatim, so
//! the same sequence of calls always produces the same text.
//!
//! # Example
//!
//! ```
//! use code2diagram_core::flowchart::{Flowchart, NodeId};
//!
//! let mut chart = Flowchart::new();
//! let app = NodeId::class(1);
//! let dep = NodeId::sanitized("lodash");
//! chart.node(app.clone(), "Class 1");
//! chart.node(dep.clone(), "lodash");
//! chart.edge(app, dep);
//!
//! assert_eq!(
//!     chart.to_string(),
//!     "graph TD\n    Class1[Class 1]\n    lodash[lodash]\n    Class1 --> lodash\n"
//! );
//! ```

use std::fmt;

/// Header line declaring a top-down directed graph.
pub const HEADER: &str = "graph TD";

/// Indentation placed before every statement line.
const INDENT: &str = "    ";

/// Identifier of a flowchart node.
///
/// Identifiers are plain ASCII words. Class nodes are numbered by position
/// and dependency nodes are derived from the dependency text, so two
/// different dependencies may map onto the same identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(String);

impl NodeId {
    /// Positional identifier for the `index`-th class (1-based): `Class{index}`.
    pub fn class(index: usize) -> Self {
        Self(format!("Class{index}"))
    }

    /// Identifier derived from arbitrary text.
    ///
    /// Every character outside `[A-Za-z0-9]` becomes `_`. The mapping is
    /// lossy: `a-b` and `a_b` both yield `a_b`.
    ///
    /// # Examples
    ///
    /// ```
    /// use code2diagram_core::flowchart::NodeId;
    ///
    /// assert_eq!(NodeId::sanitized("./utils").as_str(), "__utils");
    /// assert_eq!(NodeId::sanitized("@scope/pkg").as_str(), "_scope_pkg");
    /// ```
    pub fn sanitized(raw: &str) -> Self {
        Self(
            raw.chars()
                .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
                .collect(),
        )
    }

    /// Returns the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single line of a flowchart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Node declaration, rendered as `id[label]`.
    ///
    /// The label is written as-is; characters that are meaningful to the
    /// diagram syntax are not escaped.
    Node { id: NodeId, label: String },

    /// Directed edge, rendered as `from --> to`.
    Edge { from: NodeId, to: NodeId },
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Node { id, label } => write!(f, "{id}[{label}]"),
            Statement::Edge { from, to } => write!(f, "{from} --> {to}"),
        }
    }
}

/// An ordered, top-down directed graph description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flowchart {
    statements: Vec<Statement>,
}

impl Flowchart {
    /// Creates an empty flowchart containing only the header.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node declaration.
    pub fn node(&mut self, id: NodeId, label: impl Into<String>) {
        self.statements.push(Statement::Node {
            id,
            label: label.into(),
        });
    }

    /// Appends a directed edge.
    pub fn edge(&mut self, from: NodeId, to: NodeId) {
        self.statements.push(Statement::Edge { from, to });
    }

    /// Returns the statements in emission order.
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Iterates over node declarations in emission order.
    ///
    /// Duplicated identifiers are yielded once per declaration.
    pub fn nodes(&self) -> impl Iterator<Item = (&NodeId, &str)> {
        self.statements.iter().filter_map(|stmt| match stmt {
            Statement::Node { id, label } => Some((id, label.as_str())),
            Statement::Edge { .. } => None,
        })
    }

    /// Iterates over edges in emission order.
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> {
        self.statements.iter().filter_map(|stmt| match stmt {
            Statement::Edge { from, to } => Some((from, to)),
            Statement::Node { .. } => None,
        })
    }
}

impl fmt::Display for Flowchart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADER}")?;
        for stmt in &self.statements {
            writeln!(f, "{INDENT}{stmt}")?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    /// Sanitized identifiers only ever contain ASCII alphanumerics and `_`.
    fn check_sanitized_is_ascii_word(raw: &str) -> Result<(), TestCaseError> {
        let id = NodeId::sanitized(raw);
        prop_assert!(
            id.as_str()
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_'),
            "unexpected character in {id}"
        );
        prop_assert_eq!(id.as_str().chars().count(), raw.chars().count());
        Ok(())
    }

    proptest! {
        #[test]
        fn sanitized_is_ascii_word(raw in ".*") {
            check_sanitized_is_ascii_word(&raw)?;
        }
    }
}
