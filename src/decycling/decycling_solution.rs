use crate::error::DecyclingError;
use crate::graph::{DeBruijnGraph, Vertex};
use crate::model::SolveStatus;
use crate::oracle::OracleStats;
use std::path::Path;

/// The blocked set found by [`DecyclingModel::solve`](crate::decycling::DecyclingModel::solve).
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecyclingSolution {
    pub graph: DeBruijnGraph,
    /// Blocked vertices in increasing order.
    pub blocked: Vec<Vertex>,
    /// Number of selected symmetry classes of a partitioned solve.
    pub selected_classes: Option<usize>,
    pub status: SolveStatus,
    pub oracle: OracleStats,
    pub lazy_cuts: usize,
    /// Number of edges on the longest path of the remaining graph (`None` if it is cyclic).
    pub longest_remaining_path: Option<usize>,
}

impl DecyclingSolution {
    /// Blocked vertices as k-mer strings.
    pub fn kmers(&self) -> Vec<String> {
        self.blocked.iter().map(|v| self.graph.encode(*v)).collect()
    }

    /// Write one k-mer per line, without a trailing newline.
    pub fn write_kmers(&self, path: impl AsRef<Path>) -> Result<(), DecyclingError> {
        std::fs::write(path, self.kmers().join("\n"))?;
        Ok(())
    }

    /// `{b}-{k}-{l}.txt`, where `l` is the number of edges on the longest remaining path plus
    /// one. An empty remainder counts as a single-vertex path (`l = 1`).
    pub fn record_file_name(&self) -> String {
        let length = self.longest_remaining_path.map_or(0, |edges| edges + 1);
        format!(
            "{}-{}-{}.txt",
            self.graph.base(),
            self.graph.order(),
            length
        )
    }
}
