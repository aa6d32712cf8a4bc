//! Directed/undirected duality.
//!
//! # Model
//!
//! An undirected graph is a directed graph whose weight matrix is symmetric:
//! the undirected edge `{u, v}` is the pair of cells `u → v` and `v → u`
//! holding the same weight.
//!
//! Operations that accept [`Orientation::Undirected`] first check symmetry,
//! then canonicalize with [`Graph::to_directed`] so each undirected edge is
//! counted once. An asymmetric input is rejected with
//! [`GraphError::NotUndirected`] instead of producing a wrong answer.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GraphError, Operation, Result};
use crate::graph::adjacency::Graph;

// ---------------------------------------------------------------------------
// Orientation
// ---------------------------------------------------------------------------

/// How an operation interprets the weight matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Every cell is an independent directed edge.
    #[default]
    Directed,
    /// Mirrored cells are one edge; the matrix must be symmetric.
    Undirected,
}

impl Orientation {
    /// Map the `undirected` flag onto an orientation.
    #[must_use]
    pub const fn from_undirected(undirected: bool) -> Self {
        if undirected {
            Self::Undirected
        } else {
            Self::Directed
        }
    }

    /// Returns `true` for [`Orientation::Undirected`].
    #[must_use]
    pub const fn is_undirected(self) -> bool {
        matches!(self, Self::Undirected)
    }
}

// ---------------------------------------------------------------------------
// MergeStrategy
// ---------------------------------------------------------------------------

/// Named weight-combination rules for [`Graph::make_undirected_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeStrategy {
    /// Keep the larger weight.
    #[default]
    Max,
    /// Keep the smaller weight.
    Min,
    /// Add both weights.
    Sum,
    /// Multiply both weights.
    Product,
}

impl MergeStrategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Self; 4] = [Self::Max, Self::Min, Self::Sum, Self::Product];

    /// Combine the two directed weights of a reciprocal pair.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Max => a.max(b),
            Self::Min => a.min(b),
            Self::Sum => a + b,
            Self::Product => a * b,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Max => "max",
            Self::Min => "min",
            Self::Sum => "sum",
            Self::Product => "product",
        }
    }
}

impl fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a merge strategy name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown merge strategy '{0}' (expected one of: max, min, sum, product)")]
pub struct ParseMergeStrategyError(String);

impl FromStr for MergeStrategy {
    type Err = ParseMergeStrategyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == wanted)
            .ok_or_else(|| ParseMergeStrategyError(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Bridge
// ---------------------------------------------------------------------------

impl Graph {
    /// Returns `true` if `self[u][v] == self[v][u]` for every vertex pair.
    ///
    /// The empty graph is trivially undirected.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_undirected(&self) -> bool {
        let order = self.order();
        (0..order).all(|u| (u + 1..order).all(|v| self.weight(u, v) == self.weight(v, u)))
    }

    /// Canonical directed form of an undirected graph.
    ///
    /// For a symmetric matrix, keeps the upper triangle (including the
    /// diagonal) and zeroes the lower one, so each undirected edge appears
    /// exactly once. Any other graph is returned as-is, borrowed.
    #[must_use]
    pub fn to_directed(&self) -> Cow<'_, Self> {
        if !self.is_undirected() {
            return Cow::Borrowed(self);
        }

        let mut result = self.clone();
        for u in 0..self.order() {
            for v in 0..u {
                result.set_weight(u, v, 0.0);
            }
        }
        Cow::Owned(result)
    }

    /// Fold every reciprocal pair into one symmetric weight.
    ///
    /// For each pair `{u, v}`, both result cells become
    /// `merge(self[u][v], self[v][u])`, except when `u == v` or one side is
    /// zero: then the non-zero side is copied as-is so an edge is never
    /// combined with its own absence.
    #[must_use]
    pub fn make_undirected<F>(&self, merge: F) -> Self
    where
        F: Fn(f64, f64) -> f64,
    {
        let mut result = self.clone();
        for u in 0..self.order() {
            for v in u..self.order() {
                let (forward, backward) = (self.weight(u, v), self.weight(v, u));
                let weight = if u == v || forward == 0.0 || backward == 0.0 {
                    if forward == 0.0 { backward } else { forward }
                } else {
                    merge(forward, backward)
                };
                result.set_weight(u, v, weight);
                result.set_weight(v, u, weight);
            }
        }
        result
    }

    /// [`Graph::make_undirected`] with a named strategy.
    #[must_use]
    pub fn make_undirected_with(&self, strategy: MergeStrategy) -> Self {
        self.make_undirected(|a, b| strategy.apply(a, b))
    }

    /// Fail with [`GraphError::NotUndirected`] unless the matrix is symmetric.
    pub(crate) fn ensure_undirected(&self, operation: Operation) -> Result<()> {
        if self.is_undirected() {
            Ok(())
        } else {
            debug!(%operation, "rejecting asymmetric graph in undirected mode");
            Err(GraphError::NotUndirected { operation })
        }
    }

    /// The graph an `orientation`-aware read should scan: `self` when
    /// directed, the validated canonical form when undirected.
    pub(crate) fn resolve(
        &self,
        orientation: Orientation,
        operation: Operation,
    ) -> Result<Cow<'_, Self>> {
        match orientation {
            Orientation::Directed => Ok(Cow::Borrowed(self)),
            Orientation::Undirected => {
                self.ensure_undirected(operation)?;
                Ok(self.to_directed())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(ids: &[&str], rows: &[&[f64]]) -> Graph {
        Graph::from_matrix(ids.iter().copied(), rows).expect("valid matrix")
    }

    #[test]
    fn is_undirected_checks_symmetry() {
        assert!(Graph::new().is_undirected());
        assert!(graph(&["a"], &[&[3.0]]).is_undirected());
        assert!(graph(&["a", "b"], &[&[0.0, 2.0], &[2.0, 0.0]]).is_undirected());
        assert!(!graph(&["a", "b"], &[&[0.0, 1.0], &[0.0, 0.0]]).is_undirected());
        assert!(!graph(&["a", "b"], &[&[0.0, 1.0], &[2.0, 0.0]]).is_undirected());
    }

    #[test]
    fn to_directed_keeps_upper_triangle() {
        let g = graph(
            &["a", "b", "c"],
            &[&[1.0, 1.0, 1.0], &[1.0, 0.0, 0.0], &[1.0, 0.0, 0.0]],
        );
        let d = g.to_directed();
        assert!(matches!(d, Cow::Owned(_)));
        assert_eq!(
            *d,
            graph(
                &["a", "b", "c"],
                &[&[1.0, 1.0, 1.0], &[0.0, 0.0, 0.0], &[0.0, 0.0, 0.0]]
            )
        );
    }

    #[test]
    fn to_directed_borrows_directed_input() {
        let g = graph(&["a", "b"], &[&[0.0, 1.0], &[0.0, 0.0]]);
        let d = g.to_directed();
        assert!(matches!(d, Cow::Borrowed(_)));
        assert_eq!(*d, g);
    }

    #[test]
    fn make_undirected_copies_one_sided_edges() {
        assert_eq!(Graph::new().make_undirected_with(MergeStrategy::Max), Graph::new());

        let g = graph(
            &["a", "b", "c"],
            &[&[1.0, 1.0, 0.0], &[0.0, 0.0, 1.0], &[0.0, 0.0, 0.0]],
        );
        assert_eq!(
            g.make_undirected_with(MergeStrategy::Max),
            graph(
                &["a", "b", "c"],
                &[&[1.0, 1.0, 0.0], &[1.0, 0.0, 1.0], &[0.0, 1.0, 0.0]]
            )
        );
    }

    #[test]
    fn make_undirected_keeps_negative_one_sided_weights() {
        let g = graph(
            &["a", "b", "c"],
            &[&[0.5, -1.0, 0.0], &[0.0, 0.0, -1.0], &[0.0, 0.0, 0.0]],
        );
        assert_eq!(
            g.make_undirected_with(MergeStrategy::Max),
            graph(
                &["a", "b", "c"],
                &[&[0.5, -1.0, 0.0], &[-1.0, 0.0, -1.0], &[0.0, -1.0, 0.0]]
            )
        );
    }

    #[test]
    fn make_undirected_applies_custom_merge_to_reciprocal_pairs() {
        let g = graph(
            &["a", "b", "c"],
            &[&[2.0, 3.0, 0.0], &[2.0, 0.0, 1.0], &[0.0, 0.0, 0.0]],
        );
        assert_eq!(
            g.make_undirected(|a, b| a * b),
            graph(
                &["a", "b", "c"],
                &[&[2.0, 6.0, 0.0], &[6.0, 0.0, 1.0], &[0.0, 1.0, 0.0]]
            )
        );
    }

    #[test]
    fn merge_strategies() {
        assert_eq!(MergeStrategy::Max.apply(2.0, 3.0), 3.0);
        assert_eq!(MergeStrategy::Min.apply(2.0, 3.0), 2.0);
        assert_eq!(MergeStrategy::Sum.apply(2.0, 3.0), 5.0);
        assert_eq!(MergeStrategy::Product.apply(2.0, 3.0), 6.0);
    }

    #[test]
    fn merge_strategy_parses_names() {
        for strategy in MergeStrategy::ALL {
            assert_eq!(strategy.to_string().parse::<MergeStrategy>(), Ok(strategy));
        }
        assert_eq!(" SUM ".parse::<MergeStrategy>(), Ok(MergeStrategy::Sum));
        assert!("mean".parse::<MergeStrategy>().is_err());
    }

    #[test]
    fn resolve_rejects_asymmetric_graph_in_undirected_mode() {
        let g = graph(&["a", "b"], &[&[0.0, 1.0], &[0.0, 0.0]]);
        assert!(g.resolve(Orientation::Directed, Operation::Edges).is_ok());
        assert_eq!(
            g.resolve(Orientation::Undirected, Operation::Edges)
                .map(|_| ())
                .expect_err("asymmetric"),
            GraphError::NotUndirected {
                operation: Operation::Edges
            }
        );
    }
}
