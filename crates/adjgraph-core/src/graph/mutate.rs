//! Value-returning mutators.
//!
//! Each method borrows the input and returns a new [`Graph`]; the input is
//! never touched. Methods that reference a vertex fail with
//! [`GraphError::UnknownVertex`](crate::GraphError::UnknownVertex) when it is
//! absent, so callers must [`Graph::add_vertex`] first.

use crate::error::Result;
use crate::graph::adjacency::Graph;
use crate::graph::direction::Orientation;

impl Graph {
    /// Add `id` as a new vertex with an all-zero row and column.
    ///
    /// Returns an identical graph if `id` is already a vertex, so the call is
    /// idempotent.
    #[must_use]
    pub fn add_vertex(&self, id: &str) -> Self {
        if self.contains_vertex(id) {
            return self.clone();
        }

        let old = self.order();
        let new = old + 1;
        let mut weights = vec![0.0; new * new];
        for (u, (_, row)) in self.rows().enumerate() {
            weights[u * new..u * new + old].copy_from_slice(row);
        }

        let mut vertices = self.ids().to_vec();
        vertices.push(id.to_string());
        Self::from_parts(vertices, weights)
    }

    /// Drop `id`'s row and column.
    ///
    /// Removing a vertex that is not present returns a copy of the graph.
    #[must_use]
    pub fn remove_vertex(&self, id: &str) -> Self {
        let Some(gone) = self.vertex_index(id) else {
            return self.clone();
        };

        let kept: Vec<usize> = (0..self.order()).filter(|&i| i != gone).collect();
        let mut weights = Vec::with_capacity(kept.len() * kept.len());
        for &u in &kept {
            weights.extend(kept.iter().map(|&v| self.weight(u, v)));
        }

        let vertices = kept.iter().map(|&i| self.id(i).to_string()).collect();
        Self::from_parts(vertices, weights)
    }

    /// Add the edge `u → v` with weight `1` unless an edge already exists.
    ///
    /// An existing edge keeps its weight, whatever it is. With
    /// [`Orientation::Undirected`] the mirror cell `v → u` follows the same
    /// rule independently.
    ///
    /// # Errors
    ///
    /// Fails if either endpoint is not a vertex.
    pub fn add_edge(&self, (u, v): (&str, &str), orientation: Orientation) -> Result<Self> {
        let (ui, vi) = (self.require(u)?, self.require(v)?);
        let mut result = self.clone();

        if result.weight(ui, vi) == 0.0 {
            result.set_weight(ui, vi, 1.0);
        }
        if orientation.is_undirected() && result.weight(vi, ui) == 0.0 {
            result.set_weight(vi, ui, 1.0);
        }

        Ok(result)
    }

    /// Zero the edge `u → v` (and `v → u` when undirected).
    ///
    /// # Errors
    ///
    /// Fails if either endpoint is not a vertex.
    pub fn remove_edge(&self, (u, v): (&str, &str), orientation: Orientation) -> Result<Self> {
        self.set_edge((u, v), 0.0, orientation)
    }

    /// Overwrite the weight of `u → v` (and `v → u` when undirected).
    ///
    /// Any value is accepted, including zero and negatives.
    ///
    /// # Errors
    ///
    /// Fails if either endpoint is not a vertex.
    pub fn set_edge(
        &self,
        (u, v): (&str, &str),
        weight: f64,
        orientation: Orientation,
    ) -> Result<Self> {
        let (ui, vi) = (self.require(u)?, self.require(v)?);
        let mut result = self.clone();

        result.set_weight(ui, vi, weight);
        if orientation.is_undirected() {
            result.set_weight(vi, ui, weight);
        }

        Ok(result)
    }

    /// The raw weight of `u → v`; `0.0` when there is no edge.
    ///
    /// # Errors
    ///
    /// Fails if either endpoint is not a vertex.
    pub fn get_edge(&self, (u, v): (&str, &str)) -> Result<f64> {
        Ok(self.weight(self.require(u)?, self.require(v)?))
    }

    /// Reverse every edge: `result[u][v] = self[v][u]`.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let order = self.order();
        let mut weights = Vec::with_capacity(order * order);
        for u in 0..order {
            weights.extend((0..order).map(|v| self.weight(v, u)));
        }
        Self::from_parts(self.ids().to_vec(), weights)
    }
}
