//! The dense adjacency-matrix graph value.
//!
//! # Representation
//!
//! Vertices live in an index arena: an ordered list of ids plus a name →
//! index lookup. Weights are stored row-major in a single `order²` buffer,
//! so `weights[u * order + v]` is the weight of the edge `u → v`.
//!
//! The matrix is square by construction: every vertex has exactly one row and
//! one column, which is the "square completeness" invariant of the mapping
//! model this replaces.
//!
//! A weight of `0.0` means "no edge". Any other value, including negative and
//! fractional ones, is an edge with that weight.
//!
//! Enumeration order is insertion order and is observable: it drives
//! [`Graph::vertex_pairs`], undirected canonicalization, the cycle-detection
//! start order and topological-sort tie-breaks.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use crate::error::{GraphError, Result};

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// A finite weighted graph over string vertex ids.
///
/// Every operation takes `&self` and returns a fresh value; a `Graph` is
/// never modified after construction and two graphs never share storage.
/// [`Clone`] is the deep copy.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Vertex ids in enumeration order.
    vertices: Vec<String>,
    /// id → position in `vertices`.
    index: HashMap<String, usize>,
    /// Row-major `order × order` weight matrix.
    weights: Vec<f64>,
}

/// Value equality of the underlying mapping: same vertex set, same weight on
/// every cell. Enumeration order is not compared.
impl PartialEq for Graph {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        if self.vertices == other.vertices {
            return self.weights == other.weights;
        }
        if self.order() != other.order() {
            return false;
        }

        let Some(map) = self
            .vertices
            .iter()
            .map(|id| other.vertex_index(id))
            .collect::<Option<Vec<usize>>>()
        else {
            return false;
        };

        (0..self.order()).all(|u| {
            (0..self.order()).all(|v| self.weight(u, v) == other.weight(map[u], map[v]))
        })
    }
}

impl Graph {
    /// The empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph over `size` vertices named `id_fn(0) … id_fn(size - 1)`
    /// with every weight zero.
    ///
    /// An id produced twice names the same vertex; the first occurrence fixes
    /// its position.
    #[must_use]
    pub fn create<F, S>(size: usize, mut id_fn: F) -> Self
    where
        F: FnMut(usize) -> S,
        S: Into<String>,
    {
        let mut vertices = Vec::with_capacity(size);
        let mut index = HashMap::with_capacity(size);

        for i in 0..size {
            let id: String = id_fn(i).into();
            if !index.contains_key(&id) {
                index.insert(id.clone(), vertices.len());
                vertices.push(id);
            }
        }

        let order = vertices.len();
        Self {
            vertices,
            index,
            weights: vec![0.0; order * order],
        }
    }

    /// [`Graph::create`] with the decimal index as the vertex id.
    #[must_use]
    pub fn with_order(size: usize) -> Self {
        Self::create(size, |i| i.to_string())
    }

    /// Build a graph from explicit vertex ids and matrix rows.
    ///
    /// `rows[u][v]` is the weight of `vertices[u] → vertices[v]`.
    ///
    /// # Errors
    ///
    /// - [`GraphError::DuplicateVertex`] if an id repeats.
    /// - [`GraphError::NotSquare`] if the row count or any row length differs
    ///   from the vertex count.
    pub fn from_matrix<I, S, R>(vertices: I, rows: &[R]) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        R: AsRef<[f64]>,
    {
        let vertices: Vec<String> = vertices.into_iter().map(Into::into).collect();
        let order = vertices.len();

        let mut index = HashMap::with_capacity(order);
        for (i, id) in vertices.iter().enumerate() {
            if index.insert(id.clone(), i).is_some() {
                return Err(GraphError::DuplicateVertex { vertex: id.clone() });
            }
        }

        if rows.len() != order {
            return Err(GraphError::NotSquare {
                row: rows.len().min(order),
                expected: order,
                actual: 0,
            });
        }

        let mut weights = Vec::with_capacity(order * order);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != order {
                return Err(GraphError::NotSquare {
                    row,
                    expected: order,
                    actual: values.len(),
                });
            }
            weights.extend_from_slice(values);
        }

        Ok(Self {
            vertices,
            index,
            weights,
        })
    }

    /// Assemble a graph from parts that already satisfy the invariants.
    pub(crate) fn from_parts(vertices: Vec<String>, weights: Vec<f64>) -> Self {
        debug_assert_eq!(weights.len(), vertices.len() * vertices.len());
        let index = vertices
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();
        Self {
            vertices,
            index,
            weights,
        }
    }

    // -----------------------------------------------------------------------
    // Raw access
    // -----------------------------------------------------------------------

    /// Number of vertices.
    #[must_use]
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` if `id` is a vertex of this graph.
    #[must_use]
    pub fn contains_vertex(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Position of `id` in enumeration order.
    #[must_use]
    pub fn vertex_index(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Iterate `(id, row)` pairs in enumeration order, where `row[v]` is the
    /// weight of the edge from `id` to the `v`-th vertex.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = (&str, &[f64])> + '_ {
        let order = self.order().max(1);
        self.vertices
            .iter()
            .map(String::as_str)
            .zip(self.weights.chunks(order))
    }

    /// Resolve `id` or fail with [`GraphError::UnknownVertex`].
    pub(crate) fn require(&self, id: &str) -> Result<usize> {
        self.vertex_index(id)
            .ok_or_else(|| GraphError::unknown_vertex(id))
    }

    pub(crate) fn id(&self, idx: usize) -> &str {
        &self.vertices[idx]
    }

    pub(crate) fn ids(&self) -> &[String] {
        &self.vertices
    }

    pub(crate) fn weight(&self, u: usize, v: usize) -> f64 {
        self.weights[u * self.order() + v]
    }

    pub(crate) fn set_weight(&mut self, u: usize, v: usize, weight: f64) {
        let order = self.order();
        self.weights[u * order + v] = weight;
    }

    /// Non-zero cells of row `u`, as `(v, weight)` in enumeration order.
    pub(crate) fn out_edges(&self, u: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let order = self.order();
        self.weights[u * order..(u + 1) * order]
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, w)| w != 0.0)
    }

    /// Non-zero cells of column `v`, as `(u, weight)` in enumeration order.
    pub(crate) fn in_edges(&self, v: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        (0..self.order())
            .map(move |u| (u, self.weight(u, v)))
            .filter(|&(_, w)| w != 0.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
