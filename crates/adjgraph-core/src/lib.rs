#![forbid(unsafe_code)]
//! adjgraph-core: a dense weighted-graph algebra over string vertex ids.
//!
//! A [`Graph`] is an immutable value. Mutators return new graphs, accessors
//! borrow, and analyses (cycle detection, closure, topological sort) report
//! precondition failures as [`GraphError`] instead of looping or guessing.
//!
//! ```
//! use adjgraph_core::{Graph, Orientation};
//!
//! # fn main() -> adjgraph_core::Result<()> {
//! let g = Graph::create(3, |i| ["a", "b", "c"][i])
//!     .add_edge(("a", "b"), Orientation::Directed)?
//!     .add_edge(("b", "c"), Orientation::Directed)?;
//!
//! assert_eq!(g.topological_sort()?, vec!["a", "b", "c"]);
//! assert!(!g.is_cyclic(Orientation::Directed)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Conventions
//!
//! - **Errors**: every fallible call returns [`Result`]; nothing panics on
//!   bad input.
//! - **Logging**: `tracing` spans on the traversals. No subscriber is
//!   installed here.

pub mod d3;
pub mod error;
pub mod graph;

pub use d3::{D3Graph, D3Link, D3Node, MAX_LINKS_PER_EDGE};
pub use error::{ErrorKind, GraphError, GraphErrorCode, Operation, Result};
pub use graph::{Graph, MergeStrategy, Orientation, ParseMergeStrategyError, Weighting};
