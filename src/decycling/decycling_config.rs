use crate::error::DecyclingError;
use crate::graph::Vertex;

/// Where the symmetry partition of a partitioned solve comes from.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PartitionSource {
    /// One label per vertex; vertices with equal labels are blocked together.
    Labels(Vec<usize>),
    /// Explicit disjoint classes covering every vertex.
    Classes(Vec<Vec<Vertex>>),
    /// Every vertex is identified with its reverse complement.
    ReverseComplement,
}

/// A "flat" configuration object for [`DecyclingModel`](crate::decycling::DecyclingModel).
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecyclingConfig {
    /// Alphabet size `b`.
    pub base: usize,
    /// k-mer length `k`.
    pub order: usize,
    /// The largest number of edges allowed on a path of the remaining graph.
    pub bound: usize,
    /// Solve over symmetry classes instead of single vertices (default: `None`).
    pub partition: Option<PartitionSource>,
    /// Cycles with at most this many vertices are excluded up front (default: `order + 2`).
    /// Longer cycles are only cut by the oracle.
    pub cycle_bound: Option<usize>,
}

impl DecyclingConfig {
    /// Create a new unpartitioned instance of [`DecyclingConfig`].
    pub fn new(base: usize, order: usize, bound: usize) -> DecyclingConfig {
        DecyclingConfig {
            base,
            order,
            bound,
            partition: None,
            cycle_bound: None,
        }
    }

    /// Create a configuration from the largest allowed number of path *vertices*.
    pub fn from_length(
        base: usize,
        order: usize,
        length: usize,
    ) -> Result<DecyclingConfig, DecyclingError> {
        if length == 0 {
            return Err(DecyclingError::InvalidParameters(
                "path length must be at least 1".to_string(),
            ));
        }
        Ok(DecyclingConfig::new(base, order, length - 1))
    }

    pub fn with_partition(mut self, partition: PartitionSource) -> DecyclingConfig {
        self.partition = Some(partition);
        self
    }

    pub fn with_cycle_bound(mut self, cycle_bound: usize) -> DecyclingConfig {
        self.cycle_bound = Some(cycle_bound);
        self
    }

    /// The effective cycle bound.
    pub fn cycle_bound(&self) -> usize {
        self.cycle_bound
            .unwrap_or_else(|| self.order.saturating_add(2))
    }
}
