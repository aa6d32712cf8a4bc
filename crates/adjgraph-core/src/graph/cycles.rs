//! Depth-first cycle detection.
//!
//! # States
//!
//! Each vertex moves `unvisited → on-path → visited` during the search.
//!
//! - **Directed**: an edge to an on-path vertex is a back-edge and closes a
//!   cycle. An edge to a visited, off-path vertex is a cross or forward edge;
//!   it is safe and is not explored again.
//! - **Undirected**: every edge is stored twice, so the edge back to the
//!   vertex we arrived from is not a cycle. Any other edge to an already
//!   visited vertex is.
//!
//! The search runs from every unvisited vertex in enumeration order and stops
//! at the first cycle. Frames live on an explicit stack, so deep graphs do
//! not exhaust the call stack.

use fixedbitset::FixedBitSet;
use tracing::{instrument, trace};

use crate::error::{Operation, Result};
use crate::graph::adjacency::Graph;
use crate::graph::direction::Orientation;

/// One suspended DFS call: the vertex, where to resume its row scan, and
/// the vertex it was entered from.
struct Frame {
    vertex: usize,
    next: usize,
    parent: Option<usize>,
}

impl Frame {
    const fn enter(vertex: usize, parent: Option<usize>) -> Self {
        Self {
            vertex,
            next: 0,
            parent,
        }
    }
}

impl Graph {
    /// Returns `true` if the graph contains a cycle.
    ///
    /// A self-loop is a cycle in both modes.
    ///
    /// # Errors
    ///
    /// [`GraphError::NotUndirected`](crate::GraphError::NotUndirected) if
    /// `orientation` is undirected and the matrix is not symmetric.
    #[instrument(level = "debug", skip(self), fields(order = self.order()))]
    pub fn is_cyclic(&self, orientation: Orientation) -> Result<bool> {
        if orientation.is_undirected() {
            self.ensure_undirected(Operation::IsCyclic)?;
        }

        let mut visited = FixedBitSet::with_capacity(self.order());
        for start in 0..self.order() {
            if visited.contains(start) {
                continue;
            }
            let found = match orientation {
                Orientation::Directed => self.directed_cycle_from(start, &mut visited),
                Orientation::Undirected => self.undirected_cycle_from(start, &mut visited),
            };
            if found {
                trace!(start = self.id(start), "cycle found");
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Shorthand for `is_cyclic(Orientation::Directed)`, which cannot fail.
    pub(crate) fn has_directed_cycle(&self) -> bool {
        let mut visited = FixedBitSet::with_capacity(self.order());
        (0..self.order())
            .any(|start| !visited.contains(start) && self.directed_cycle_from(start, &mut visited))
    }

    fn directed_cycle_from(&self, start: usize, visited: &mut FixedBitSet) -> bool {
        let mut on_path = FixedBitSet::with_capacity(self.order());
        let mut stack = vec![Frame::enter(start, None)];
        visited.insert(start);
        on_path.insert(start);

        while let Some(frame) = stack.last_mut() {
            let u = frame.vertex;
            let next = (frame.next..self.order()).find(|&v| self.weight(u, v) != 0.0);

            let Some(v) = next else {
                on_path.set(u, false);
                stack.pop();
                continue;
            };
            frame.next = v + 1;

            if on_path.contains(v) {
                return true;
            }
            if !visited.contains(v) {
                visited.insert(v);
                on_path.insert(v);
                stack.push(Frame::enter(v, Some(u)));
            }
        }

        false
    }

    fn undirected_cycle_from(&self, start: usize, visited: &mut FixedBitSet) -> bool {
        let mut stack = vec![Frame::enter(start, None)];
        visited.insert(start);

        while let Some(frame) = stack.last_mut() {
            let u = frame.vertex;
            let next = (frame.next..self.order()).find(|&v| self.weight(u, v) != 0.0);

            let Some(v) = next else {
                stack.pop();
                continue;
            };
            frame.next = v + 1;

            if visited.contains(v) {
                if frame.parent != Some(v) {
                    return true;
                }
            } else {
                visited.insert(v);
                stack.push(Frame::enter(v, Some(u)));
            }
        }

        false
    }
}
