use crate::graph::DeBruijnGraph;

/// A "flat" configuration object for bounded cycle enumeration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CycleConfig {
    /// The graph whose cycles are enumerated.
    pub graph: DeBruijnGraph,
    /// Only cycles with at most this many vertices are reported.
    pub length_bound: usize,
    /// Vertices excluded from the search (default: none). Use this to enumerate cycles
    /// of an induced subgraph.
    ///
    /// # Panics
    ///
    /// The enumeration is allowed to panic if the mask does not have one entry per vertex.
    pub blocked: Option<Vec<bool>>,
}

impl CycleConfig {
    /// Create a new instance of [`CycleConfig`] for the full graph.
    pub fn new(graph: DeBruijnGraph, length_bound: usize) -> CycleConfig {
        CycleConfig {
            graph,
            length_bound,
            blocked: None,
        }
    }

    /// Restrict the enumeration to vertices that are not `blocked`.
    pub fn restricted(mut self, blocked: Vec<bool>) -> CycleConfig {
        self.blocked = Some(blocked);
        self
    }

    pub fn is_allowed(&self, vertex: usize) -> bool {
        self.blocked.as_ref().is_none_or(|blocked| !blocked[vertex])
    }
}
