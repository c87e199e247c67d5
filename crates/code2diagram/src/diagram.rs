//! Flowchart construction from structural counts.
//!
//! Given a class count and an ordered dependency list, [`build_diagram`]
//! emits, in order:
//!
//! 1. one node per class (`Class1` .. `ClassN`);
//! 2. for each dependency, its node followed by an edge from every class;
//! 3. a chain `Class1 --> Class2 --> ... --> ClassN`.
//!
//! Class nodes are positional and unrelated to the class names in the
//! source. Dependency nodes are keyed by [`NodeId::sanitized`], so distinct
//! dependencies may share an identifier; each still gets its own node
//! declaration and edges.

use log::debug;

use code2diagram_core::flowchart::{Flowchart, NodeId};

/// Builds the flowchart for `class_count` classes and `dependencies`.
pub fn build_diagram<S: AsRef<str>>(class_count: usize, dependencies: &[S]) -> Flowchart {
    let mut chart = Flowchart::new();

    for i in 1..=class_count {
        chart.node(NodeId::class(i), format!("Class {i}"));
    }

    for dep in dependencies {
        let dep = dep.as_ref();
        let dep_id = NodeId::sanitized(dep);
        chart.node(dep_id.clone(), dep);
        for i in 1..=class_count {
            chart.edge(NodeId::class(i), dep_id.clone());
        }
    }

    for i in 1..class_count {
        chart.edge(NodeId::class(i), NodeId::class(i + 1));
    }

    debug!(
        class_count,
        dependency_count = dependencies.len(),
        statements = chart.statements().len();
        "Flowchart built"
    );

    chart
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    /// Statement counts follow directly from the inputs.
    fn check_statement_counts(class_count: usize, deps: &[String]) -> Result<(), TestCaseError> {
        let chart = build_diagram(class_count, deps);

        prop_assert_eq!(chart.nodes().count(), class_count + deps.len());
        prop_assert_eq!(
            chart.edges().count(),
            class_count * deps.len() + class_count.saturating_sub(1)
        );
        prop_assert_eq!(
            chart.to_string().lines().count(),
            1 + chart.statements().len()
        );
        Ok(())
    }

    proptest! {
        #[test]
        fn statement_counts(
            class_count in 0usize..12,
            deps in prop::collection::vec("[a-z./@-]{1,10}", 0..8),
        ) {
            check_statement_counts(class_count, &deps)?;
        }
    }
}
