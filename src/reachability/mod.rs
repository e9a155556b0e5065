//! Walk-length reachability inside the unblocked part of a De Bruijn graph.
//!
//! Two views of the same quantity are provided:
//!
//! - [`WalkCircuit`] encodes "`v` ends an unblocked walk of exactly `t` edges" as binary
//!   model variables `P[t][v]` with indicator constraints. Requiring the last row to be empty
//!   bounds the longest remaining path.
//! - [`WalkLayers`] evaluates the same layers exactly for a concrete blocked mask, layer by
//!   layer, until a layer is empty (the remaining graph is acyclic) or the iteration limit
//!   of [`WalkConfig`] is reached (the remaining graph has a cycle).
//!
//! # Example
//!
//! ```
//! use debruijn_decycling::graph::DeBruijnGraph;
//! use debruijn_decycling::reachability::{WalkConfig, WalkLayers, WalkState};
//! use computation_process::Algorithm;
//!
//! let graph = DeBruijnGraph::new(2, 2).unwrap();
//! // Blocking 00, 01 and 11 leaves the single vertex 10 without a self-loop.
//! let config = WalkConfig::new(graph, vec![true, true, false, true]);
//! let state = WalkState::from(&config);
//! let profile = WalkLayers::run(config, state).unwrap();
//! assert_eq!(profile.longest_walk(), Some(0));
//! ```

use cancel_this::Cancellable;
use computation_process::{Algorithm, Computation};


mod circuit;
mod layer_extension;
mod next_layer;
mod walk_config;
mod walk_state;

use crate::graph::DeBruijnGraph;
pub use circuit::WalkCircuit;
pub use layer_extension::LayerExtension;
pub use next_layer::ForwardLayer;
pub use walk_config::WalkConfig;
pub use walk_state::WalkState;

/// A helper alias which allows us to use [`WalkComputation`] as shorthand for
/// `Computation<Context = WalkConfig, State = WalkState>`.
pub type WalkComputation<STEP> = Computation<WalkConfig, WalkState, WalkProfile, STEP>;

/// Layers of walks ending in each vertex (`P[t][v]` of the walk circuit).
pub type WalkLayers = WalkComputation<LayerExtension<ForwardLayer>>;

/// A single layer step iterated by [`LayerExtension`].
pub trait LayerOperator {
    /// Compute the layer of walks that are one edge longer than those in `layer`.
    fn step(context: &WalkConfig, layer: &[bool]) -> Cancellable<Vec<bool>>;
}

/// The nonempty walk layers of a blocked mask.
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkProfile {
    /// `layers[t][v]` is set iff an unblocked walk of exactly `t` edges ends in `v`.
    pub layers: Vec<Vec<bool>>,
    /// The computation hit [`WalkConfig::max_iterations`] before an empty layer appeared.
    pub truncated: bool,
}

impl WalkProfile {
    /// Number of edges of the longest remaining walk, or `None` if the computation was
    /// truncated. An empty remaining graph has longest walk zero.
    pub fn longest_walk(&self) -> Option<usize> {
        if self.truncated {
            None
        } else {
            Some(self.layers.len().saturating_sub(1))
        }
    }

    /// Number of vertices in every layer.
    pub fn layer_sizes(&self) -> Vec<usize> {
        self.layers
            .iter()
            .map(|layer| layer.iter().filter(|it| **it).count())
            .collect()
    }

    /// Whether `vertex` ends a walk of exactly `t` edges.
    pub fn contains(&self, t: usize, vertex: usize) -> bool {
        self.layers.get(t).is_some_and(|layer| layer[vertex])
    }
}

/// Compute the [`WalkLayers`] profile of the subgraph induced by vertices not in `blocked`.
pub fn walk_profile(graph: &DeBruijnGraph, blocked: &[bool]) -> Cancellable<WalkProfile> {
    let config = WalkConfig::new(*graph, blocked.to_vec());
    let state = WalkState::from(&config);
    WalkLayers::run(config, state)
}
