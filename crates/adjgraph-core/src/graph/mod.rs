//! The weighted graph value and its algebra.
//!
//! Everything hangs off [`Graph`]; the submodules only split its `impl`
//! blocks by concern.
//!
//! ## Submodules
//!
//! - [`adjacency`]: storage, constructors and raw cell access.
//! - [`mutate`]: persistent updates (`add_vertex`, `set_edge`, `transpose`, …).
//! - [`direction`]: symmetric-matrix view of undirected graphs.
//! - [`access`]: enumeration, degree and neighbourhood queries.
//! - [`closure`]: ancestors and descendants.
//! - [`cycles`]: directed and undirected cycle detection.
//! - [`topo`]: topological sort.

pub mod access;
pub mod adjacency;
pub mod closure;
pub mod cycles;
pub mod direction;
pub mod mutate;
pub mod topo;

pub use access::Weighting;
pub use adjacency::Graph;
pub use direction::{MergeStrategy, Orientation, ParseMergeStrategyError};
