//! Node-link interchange in the shape d3-force consumes.
//!
//! Link multiplicity is carried by repetition: an edge of weight `3` is three
//! identical link entries, not one entry with a weight field. The JSON shape
//! is exactly `{"nodes":[{"id":..}],"links":[{"source":..,"target":..}]}`.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{GraphError, Operation, Result};
use crate::graph::{Graph, Orientation};

/// A node-link document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct D3Graph {
    pub nodes: Vec<D3Node>,
    pub links: Vec<D3Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct D3Node {
    pub id: String,
}

/// One unit of multiplicity on the edge `source → target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct D3Link {
    pub source: String,
    pub target: String,
}

impl D3Node {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl D3Link {
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Most link entries a single edge may expand into.
pub const MAX_LINKS_PER_EDGE: usize = 1 << 24;

/// Number of link entries emitted for a non-zero weight.
///
/// At least one, so fractional and negative edges are not lost. `None` when
/// the weight needs more than [`MAX_LINKS_PER_EDGE`] links.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn multiplicity(weight: f64) -> Option<usize> {
    if weight > 1.0 {
        let links = weight.ceil();
        (links <= MAX_LINKS_PER_EDGE as f64).then_some(links as usize)
    } else {
        Some(1)
    }
}

impl Graph {
    /// Export as a node-link document.
    ///
    /// Nodes follow enumeration order; links are emitted row by row. In
    /// undirected mode the graph is canonicalized first so each undirected
    /// edge appears once.
    ///
    /// # Errors
    ///
    /// [`GraphError::NotUndirected`] if `orientation` is undirected and the
    /// matrix is not symmetric; [`GraphError::TooManyLinks`] if a weight
    /// needs more than [`MAX_LINKS_PER_EDGE`] links.
    #[instrument(level = "debug", skip(self), fields(order = self.order()))]
    pub fn to_d3(&self, orientation: Orientation) -> Result<D3Graph> {
        let resolved = self.resolve(orientation, Operation::ToD3)?;

        let nodes = self.vertices().map(D3Node::new).collect();
        let mut links = Vec::new();
        for u in 0..resolved.order() {
            for (v, w) in resolved.out_edges(u) {
                let Some(count) = multiplicity(w) else {
                    debug!(weight = w, "edge weight exceeds link limit");
                    return Err(GraphError::TooManyLinks {
                        tail: self.id(u).to_string(),
                        head: self.id(v).to_string(),
                        limit: MAX_LINKS_PER_EDGE,
                    });
                };
                let link = D3Link::new(self.id(u), self.id(v));
                links.extend(std::iter::repeat_n(link, count));
            }
        }

        debug!(links = links.len(), "exported node-link document");
        Ok(D3Graph { nodes, links })
    }

    /// Import a node-link document.
    ///
    /// Every link adds `1` to its cell, so repeated links accumulate into a
    /// weight. In undirected mode a link between distinct vertices also adds
    /// `1` to the mirrored cell. Repeated node ids name one vertex.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`] if a link names an id missing from `nodes`.
    #[instrument(
        level = "debug",
        skip(document),
        fields(nodes = document.nodes.len(), links = document.links.len())
    )]
    pub fn from_d3(document: &D3Graph, orientation: Orientation) -> Result<Self> {
        let mut graph = Self::create(document.nodes.len(), |i| document.nodes[i].id.as_str());

        for link in &document.links {
            let u = graph.require(&link.source)?;
            let v = graph.require(&link.target)?;
            graph.set_weight(u, v, graph.weight(u, v) + 1.0);
            if orientation.is_undirected() && u != v {
                graph.set_weight(v, u, graph.weight(v, u) + 1.0);
            }
        }

        Ok(graph)
    }
}
