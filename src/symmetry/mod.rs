//! Symmetry classes of De Bruijn graph vertices.
//!
//! Two group actions partition the vertex set into orbits:
//!
//! - **PCR** (pure cycling register): rotate the k-mer left by one symbol,
//!   see [`RotationClasses`].
//! - **PCCR** (pure complemented cycling register): rotate left and complement the symbol
//!   moving from the front to the back, see [`RotationComplementClasses`].
//!
//! Every orbit is reported in its cyclic order, starting from its smallest vertex. Since
//! a rotation is always an edge of the graph, every PCR class is also a cycle of the graph.
//!
//! # Example
//!
//! ```
//! use debruijn_decycling::graph::DeBruijnGraph;
//! use debruijn_decycling::symmetry::RotationClasses;
//! use computation_process::Stateful;
//!
//! let graph = DeBruijnGraph::new(2, 3).unwrap();
//! let classes: Vec<Vec<usize>> = RotationClasses::configure(graph, &graph)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(classes, vec![vec![0], vec![1, 2, 4], vec![3, 6, 5], vec![7]]);
//! ```

mod complementer;
mod orbits;
mod partition;


use crate::graph::{DeBruijnGraph, Vertex};
use cancel_this::Cancellable;
use computation_process::{Generator, Stateful};
pub use complementer::Complementer;
pub use orbits::{OrbitState, OrbitStep, Rotation, RotationComplement};
pub use partition::Partition;

/// A vertex map whose orbits define a symmetry class.
///
/// The map must be a bijection of the vertex set, so that every orbit eventually returns
/// to its starting vertex.
pub trait OrbitAction {
    fn apply(graph: &DeBruijnGraph, vertex: Vertex) -> Vertex;
}

/// Lazily enumerates the PCR classes of a graph.
pub type RotationClasses = Generator<DeBruijnGraph, OrbitState, Vec<Vertex>, OrbitStep<Rotation>>;

/// Lazily enumerates the PCCR classes of a graph.
pub type RotationComplementClasses =
    Generator<DeBruijnGraph, OrbitState, Vec<Vertex>, OrbitStep<RotationComplement>>;

/// Collect all PCR classes of `graph`.
pub fn rotation_classes(graph: &DeBruijnGraph) -> Cancellable<Vec<Vec<Vertex>>> {
    RotationClasses::configure(*graph, graph).collect()
}

/// Collect all PCCR classes of `graph`.
pub fn rotation_complement_classes(graph: &DeBruijnGraph) -> Cancellable<Vec<Vec<Vertex>>> {
    RotationComplementClasses::configure(*graph, graph).collect()
}
