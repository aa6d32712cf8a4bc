//! Kahn's algorithm over weighted in-degrees.
//!
//! In-degree is the *sum* of incoming weights, so an edge of weight `10`
//! holds its target back until `10` has been subtracted. A vertex is also
//! released once every incoming edge has been processed, so rounding in a
//! fractional sum never strands it. Ready vertices are
//! served strictly first-in first-out: the seed order is enumeration order,
//! and later arrivals queue in the order rows are scanned. Output is
//! reproducible from the graph alone; no other tie-break is applied.

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use tracing::{debug, instrument, trace};

use crate::error::{GraphError, Operation, Result};
use crate::graph::adjacency::Graph;

impl Graph {
    /// Order the vertices so every edge points forward.
    ///
    /// # Errors
    ///
    /// [`GraphError::Cyclic`] if the graph contains a directed cycle.
    #[instrument(level = "debug", skip(self), fields(order = self.order()))]
    pub fn topological_sort(&self) -> Result<Vec<&str>> {
        if self.has_directed_cycle() {
            debug!("refusing to sort cyclic graph");
            return Err(GraphError::Cyclic {
                operation: Operation::TopologicalSort,
            });
        }

        let order = self.order();
        let mut remaining: Vec<f64> = (0..order)
            .map(|v| self.in_edges(v).map(|(_, w)| w).sum())
            .collect();
        let mut pending: Vec<usize> = (0..order).map(|v| self.in_edges(v).count()).collect();

        let mut queued = FixedBitSet::with_capacity(order);
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(order);
        for (v, _) in remaining.iter().enumerate().filter(|(_, d)| **d == 0.0) {
            queued.insert(v);
            queue.push_back(v);
        }

        let mut result = Vec::with_capacity(order);
        while let Some(u) = queue.pop_front() {
            result.push(self.id(u));
            for (v, w) in self.out_edges(u) {
                if queued.contains(v) {
                    continue;
                }
                remaining[v] -= w;
                pending[v] -= 1;
                if remaining[v] <= 0.0 || pending[v] == 0 {
                    trace!(vertex = self.id(v), "ready");
                    queued.insert(v);
                    queue.push_back(v);
                }
            }
        }

        Ok(result)
    }
}
