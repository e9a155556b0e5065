use crate::graph::DeBruijnGraph;

/// A "flat" configuration object for the exact walk layer computation.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkConfig {
    /// The graph in which walks are counted.
    pub graph: DeBruijnGraph,
    /// Vertices that no walk may visit.
    ///
    /// # Panics
    ///
    /// The procedure is allowed to panic if the mask does not have one entry per vertex.
    pub blocked: Vec<bool>,
    /// Stop after this many layers were added (default: number of vertices). The resulting
    /// profile is then marked as truncated.
    ///
    /// With the default value, truncation happens exactly when the unblocked vertices
    /// contain a cycle, since a walk with `N` edges must repeat a vertex.
    pub max_iterations: usize,
}

impl From<DeBruijnGraph> for WalkConfig {
    fn from(value: DeBruijnGraph) -> Self {
        WalkConfig::new(value, vec![false; value.vertex_count()])
    }
}

impl WalkConfig {
    /// Create a new instance of [`WalkConfig`] for the subgraph induced by vertices that
    /// are not `blocked`.
    pub fn new(graph: DeBruijnGraph, blocked: Vec<bool>) -> WalkConfig {
        WalkConfig {
            max_iterations: graph.vertex_count(),
            graph,
            blocked,
        }
    }

    pub fn is_allowed(&self, vertex: usize) -> bool {
        !self.blocked[vertex]
    }
}
