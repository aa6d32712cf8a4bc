//! Read-only structural queries: enumeration, degree, neighbourhoods.
//!
//! Vertex sets are returned as [`BTreeSet`]s of ids borrowed from the graph.
//! Pair and edge lists are [`Vec`]s in enumeration order; each entry occurs
//! once.

use std::collections::BTreeSet;

use crate::error::{Operation, Result};
use crate::graph::adjacency::Graph;
use crate::graph::direction::Orientation;

/// Whether degree queries count edges or sum their weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Weighting {
    /// Each non-zero cell contributes `1`.
    #[default]
    Count,
    /// Each non-zero cell contributes its weight.
    Weighted,
}

impl Weighting {
    /// Map the `weighted` flag onto a weighting.
    #[must_use]
    pub const fn from_weighted(weighted: bool) -> Self {
        if weighted { Self::Weighted } else { Self::Count }
    }

    const fn contribution(self, weight: f64) -> f64 {
        match self {
            Self::Count => 1.0,
            Self::Weighted => weight,
        }
    }
}

impl Graph {
    /// Vertex ids in enumeration order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.ids().iter().map(String::as_str)
    }

    /// Every unordered pair `{u, v}` with `u` at or before `v` in enumeration
    /// order, diagonal included.
    #[must_use]
    pub fn vertex_pairs(&self) -> Vec<(&str, &str)> {
        let order = self.order();
        let mut pairs = Vec::with_capacity(order * (order + 1) / 2);
        for u in 0..order {
            for v in u..order {
                pairs.push((self.id(u), self.id(v)));
            }
        }
        pairs
    }

    /// Number of edges.
    ///
    /// In undirected mode each mirrored pair counts once.
    ///
    /// # Errors
    ///
    /// [`GraphError::NotUndirected`](crate::GraphError::NotUndirected) if
    /// `orientation` is undirected and the matrix is not symmetric.
    pub fn size(&self, orientation: Orientation) -> Result<usize> {
        let resolved = self.resolve(orientation, Operation::Size)?;
        Ok((0..resolved.order())
            .map(|u| resolved.out_edges(u).count())
            .sum())
    }

    /// Every edge `(u, v)` with a non-zero weight, row by row.
    ///
    /// In undirected mode each mirrored pair appears once, as `(u, v)` with
    /// `u` at or before `v`.
    ///
    /// # Errors
    ///
    /// [`GraphError::NotUndirected`](crate::GraphError::NotUndirected) if
    /// `orientation` is undirected and the matrix is not symmetric.
    pub fn edges(&self, orientation: Orientation) -> Result<Vec<(&str, &str)>> {
        let resolved = self.resolve(orientation, Operation::Edges)?;
        let mut edges = Vec::new();
        for u in 0..resolved.order() {
            edges.extend(resolved.out_edges(u).map(|(v, _)| (self.id(u), self.id(v))));
        }
        Ok(edges)
    }

    /// Number (or total weight) of edges entering `vertex`.
    ///
    /// # Errors
    ///
    /// Fails if `vertex` is not in the graph.
    pub fn indegree(&self, vertex: &str, weighting: Weighting) -> Result<f64> {
        let v = self.require(vertex)?;
        Ok(self
            .in_edges(v)
            .map(|(_, w)| weighting.contribution(w))
            .sum())
    }

    /// Number (or total weight) of edges leaving `vertex`.
    ///
    /// # Errors
    ///
    /// Fails if `vertex` is not in the graph.
    pub fn outdegree(&self, vertex: &str, weighting: Weighting) -> Result<f64> {
        let u = self.require(vertex)?;
        Ok(self
            .out_edges(u)
            .map(|(_, w)| weighting.contribution(w))
            .sum())
    }

    /// In-degree plus out-degree.
    ///
    /// A self-loop counts twice. In undirected mode a reciprocal pair counts
    /// once instead of twice.
    ///
    /// # Errors
    ///
    /// - Fails if `vertex` is not in the graph.
    /// - [`GraphError::NotUndirected`](crate::GraphError::NotUndirected) if
    ///   `orientation` is undirected and the matrix is not symmetric.
    pub fn degree(
        &self,
        vertex: &str,
        weighting: Weighting,
        orientation: Orientation,
    ) -> Result<f64> {
        self.require(vertex)?;
        let resolved = self.resolve(orientation, Operation::Degree)?;
        Ok(resolved.indegree(vertex, weighting)? + resolved.outdegree(vertex, weighting)?)
    }

    /// Vertices with an edge into `vertex`.
    ///
    /// A self-loop makes `vertex` its own parent.
    ///
    /// # Errors
    ///
    /// Fails if `vertex` is not in the graph.
    pub fn parents(&self, vertex: &str) -> Result<BTreeSet<&str>> {
        let v = self.require(vertex)?;
        Ok(self.in_edges(v).map(|(u, _)| self.id(u)).collect())
    }

    /// Vertices `vertex` has an edge to.
    ///
    /// A self-loop makes `vertex` its own child.
    ///
    /// # Errors
    ///
    /// Fails if `vertex` is not in the graph.
    pub fn children(&self, vertex: &str) -> Result<BTreeSet<&str>> {
        let u = self.require(vertex)?;
        Ok(self.out_edges(u).map(|(v, _)| self.id(v)).collect())
    }
}
