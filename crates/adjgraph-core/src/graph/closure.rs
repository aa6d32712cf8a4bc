//! Transitive closure over parents and children.
//!
//! `ancestors(v)` is the fixed point of `parents(v) ∪ ancestors(p)` for each
//! parent `p`; `descendants` is the same over children. The recursion only
//! terminates on acyclic graphs, so both check for a directed cycle up front
//! and fail instead of looping.

use std::collections::BTreeSet;

use fixedbitset::FixedBitSet;
use tracing::{debug, instrument};

use crate::error::{GraphError, Operation, Result};
use crate::graph::adjacency::Graph;

#[derive(Clone, Copy)]
enum Step {
    Up,
    Down,
}

impl Graph {
    /// Every vertex with a directed path into `vertex`.
    ///
    /// # Errors
    ///
    /// - Fails if `vertex` is not in the graph.
    /// - [`GraphError::Cyclic`] if the graph contains a directed cycle.
    #[instrument(level = "debug", skip(self), fields(order = self.order()))]
    pub fn ancestors(&self, vertex: &str) -> Result<BTreeSet<&str>> {
        self.reachable(vertex, Step::Up, Operation::Ancestors)
    }

    /// Every vertex reachable by a directed path from `vertex`.
    ///
    /// # Errors
    ///
    /// - Fails if `vertex` is not in the graph.
    /// - [`GraphError::Cyclic`] if the graph contains a directed cycle.
    #[instrument(level = "debug", skip(self), fields(order = self.order()))]
    pub fn descendants(&self, vertex: &str) -> Result<BTreeSet<&str>> {
        self.reachable(vertex, Step::Down, Operation::Descendants)
    }

    fn reachable(
        &self,
        vertex: &str,
        step: Step,
        operation: Operation,
    ) -> Result<BTreeSet<&str>> {
        let start = self.require(vertex)?;
        if self.has_directed_cycle() {
            debug!(%operation, "refusing closure over cyclic graph");
            return Err(GraphError::Cyclic { operation });
        }

        let mut seen = FixedBitSet::with_capacity(self.order());
        let mut pending = vec![start];
        let mut result = BTreeSet::new();

        while let Some(u) = pending.pop() {
            let neighbours: Vec<usize> = match step {
                Step::Up => self.in_edges(u).map(|(p, _)| p).collect(),
                Step::Down => self.out_edges(u).map(|(c, _)| c).collect(),
            };
            for n in neighbours {
                if !seen.put(n) {
                    result.insert(self.id(n));
                    pending.push(n);
                }
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(ids: &[&str], rows: &[&[f64]]) -> Graph {
        Graph::from_matrix(ids.iter().copied(), rows).expect("valid matrix")
    }

    /// a -> b -> c, a -> c, d isolated
    fn chain() -> Graph {
        graph(
            &["a", "b", "c", "d"],
            &[
                &[0.0, 1.0, 1.0, 0.0],
                &[0.0, 0.0, 1.0, 0.0],
                &[0.0, 0.0, 0.0, 0.0],
                &[0.0, 0.0, 0.0, 0.0],
            ],
        )
    }

    #[test]
    fn ancestors_of_chain() {
        let g = chain();
        assert_eq!(g.ancestors("a"), Ok(BTreeSet::new()));
        assert_eq!(g.ancestors("b"), Ok(BTreeSet::from(["a"])));
        assert_eq!(g.ancestors("c"), Ok(BTreeSet::from(["a", "b"])));
        assert_eq!(g.ancestors("d"), Ok(BTreeSet::new()));
    }

    #[test]
    fn descendants_of_chain() {
        let g = chain();
        assert_eq!(g.descendants("a"), Ok(BTreeSet::from(["b", "c"])));
        assert_eq!(g.descendants("b"), Ok(BTreeSet::from(["c"])));
        assert_eq!(g.descendants("c"), Ok(BTreeSet::new()));
    }

    #[test]
    fn single_vertex_has_no_relatives() {
        let g = graph(&["a"], &[&[0.0]]);
        assert_eq!(g.ancestors("a"), Ok(BTreeSet::new()));
        assert_eq!(g.descendants("a"), Ok(BTreeSet::new()));
    }

    #[test]
    fn cyclic_graph_is_rejected_for_every_vertex() {
        let g = graph(
            &["a", "b", "c"],
            &[&[0.0, 1.0, 0.0], &[1.0, 0.0, 0.0], &[0.0, 0.0, 0.0]],
        );
        for v in ["a", "b", "c"] {
            assert_eq!(
                g.ancestors(v),
                Err(GraphError::Cyclic {
                    operation: Operation::Ancestors
                })
            );
            assert_eq!(
                g.descendants(v),
                Err(GraphError::Cyclic {
                    operation: Operation::Descendants
                })
            );
        }
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let g = graph(&["a"], &[&[1.0]]);
        assert!(g.ancestors("a").is_err());
    }

    #[test]
    fn unknown_vertex_is_rejected() {
        assert!(chain().ancestors("z").is_err());
    }
}
