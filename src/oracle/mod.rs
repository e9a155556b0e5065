//! The lazy-constraint oracle of the decycling model.
//!
//! For every integer-feasible candidate, the oracle decodes the blocked set `X` and inspects
//! the subgraph `H` induced by the remaining vertices:
//!
//!  - If `H` has a cycle, up to [`MAX_CYCLE_CUTS`] vertex-disjoint cycles are extracted from
//!    its residual core and each one becomes a cut `Σ DS[cycle] >= 1`.
//!  - Otherwise, if the longest path of `H` has `L > bound + 1` vertices, every window of
//!    `bound + 2` consecutive path vertices needs a blocked vertex, which gives the cut
//!    `Σ DS[path] >= ⌊L / (bound + 2)⌋`.
//!  - Otherwise the candidate is accepted.
//!
//! Every cut excludes the current candidate and is valid for every feasible solution, so
//! cuts are never retracted.

use crate::error::DecyclingError;
use crate::graph::{DeBruijnGraph, InducedSubgraph, Vertex};
use crate::log_mask;
use crate::model::{Incumbent, LazyConstraints, LinearConstraint, LinearExpr, VarId};
use log::{debug, trace, warn};
use std::fmt::{Display, Formatter};
use std::time::{Duration, Instant};


/// Maximal number of cycle cuts emitted for a single candidate.
pub const MAX_CYCLE_CUTS: usize = 3;

/// Monotone diagnostics collected over all oracle calls.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OracleStats {
    pub calls: usize,
    pub accepted: usize,
    pub cycle_cuts: usize,
    pub path_cuts: usize,
    pub inconsistencies: usize,
    pub oracle_time: Duration,
    pub cycles_time: Duration,
    pub longest_path_time: Duration,
}

impl Display for OracleStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "calls={}; accepted={}; cycle cuts={}; path cuts={}; inconsistencies={}; \
             time={:?} (cycles {:?}, longest path {:?})",
            self.calls,
            self.accepted,
            self.cycle_cuts,
            self.path_cuts,
            self.inconsistencies,
            self.oracle_time,
            self.cycles_time,
            self.longest_path_time
        )
    }
}

/// Separates candidates whose remaining graph is cyclic or has a path longer than `bound`
/// edges.
#[derive(Clone, Debug)]
pub struct DecyclingOracle {
    graph: DeBruijnGraph,
    bound: usize,
    ds: Vec<VarId>,
    stats: OracleStats,
}

impl DecyclingOracle {
    /// # Panics
    ///
    /// Panics if `ds` does not have one variable per vertex.
    pub fn new(graph: DeBruijnGraph, bound: usize, ds: Vec<VarId>) -> DecyclingOracle {
        assert_eq!(ds.len(), graph.vertex_count(), "One DS variable per vertex");
        DecyclingOracle {
            graph,
            bound,
            ds,
            stats: OracleStats::default(),
        }
    }

    pub fn stats(&self) -> &OracleStats {
        &self.stats
    }

    pub fn into_stats(self) -> OracleStats {
        self.stats
    }

    /// The blocked mask encoded by the `DS` variables of `incumbent`.
    pub fn blocked_mask(&self, incumbent: &Incumbent) -> Vec<bool> {
        self.ds.iter().map(|var| incumbent.is_set(*var)).collect()
    }

    /// Cuts violated by the blocked set `blocked`. An empty result accepts the set.
    ///
    /// Fails with [`DecyclingError::OracleInconsistency`] when the remaining graph is cyclic
    /// but no cycle can be extracted.
    pub fn cuts(&mut self, blocked: &[bool]) -> Result<Vec<LinearConstraint>, DecyclingError> {
        let induced = InducedSubgraph::new(&self.graph, blocked);

        let start = Instant::now();
        let peeling = induced.peel();
        if !peeling.is_acyclic() {
            let cycles = induced.extract_cycles(&peeling, MAX_CYCLE_CUTS);
            self.stats.cycles_time += start.elapsed();
            let cycles = match cycles {
                Some(cycles) if !cycles.is_empty() => cycles,
                _ => {
                    return Err(DecyclingError::OracleInconsistency(format!(
                        "residual core ({}) without an extractable cycle",
                        log_mask(&peeling.residual)
                    )));
                }
            };
            let first = self.stats.cycle_cuts;
            self.stats.cycle_cuts += cycles.len();
            return Ok(cycles
                .iter()
                .enumerate()
                .map(|(i, cycle)| self.cycle_cut(cycle, first + i))
                .collect());
        }
        self.stats.cycles_time += start.elapsed();

        let start = Instant::now();
        let path = induced.longest_path(&peeling);
        self.stats.longest_path_time += start.elapsed();
        let Some(path) = path else {
            return Err(DecyclingError::OracleInconsistency(
                "acyclic subgraph without a longest path".to_string(),
            ));
        };

        let window = self.bound.saturating_add(2);
        if path.len() < window {
            return Ok(Vec::new());
        }
        trace!(
            "Longest remaining path has {} vertices (allowed: {}).",
            path.len(),
            window - 1
        );
        let cut = self.path_cut(&path, path.len() / window);
        self.stats.path_cuts += 1;
        Ok(vec![cut])
    }

    fn cycle_cut(&self, cycle: &[Vertex], index: usize) -> LinearConstraint {
        LinearExpr::sum(cycle.iter().map(|v| self.ds[*v]))
            .at_least(1.0)
            .named(format!("cycle-cut[{}]", index))
    }

    fn path_cut(&self, path: &[Vertex], rhs: usize) -> LinearConstraint {
        LinearExpr::sum(path.iter().map(|v| self.ds[*v]))
            .at_least(rhs as f64)
            .named(format!("path-cut[{}]", self.stats.path_cuts))
    }

    /// `Σ_{v ∉ X} DS[v] >= 1`: at least one more vertex must be blocked.
    fn no_good_cut(&self, blocked: &[bool]) -> LinearConstraint {
        let free = self
            .graph
            .vertices()
            .filter(|v| !blocked[*v])
            .map(|v| self.ds[v]);
        LinearExpr::sum(free)
            .at_least(1.0)
            .named(format!("no-good[{}]", self.stats.inconsistencies))
    }
}

impl LazyConstraints for DecyclingOracle {
    fn separate(&mut self, incumbent: &Incumbent) -> Vec<LinearConstraint> {
        let start = Instant::now();
        self.stats.calls += 1;
        let blocked = self.blocked_mask(incumbent);

        let cuts = match self.cuts(&blocked) {
            Ok(cuts) => cuts,
            Err(error) => {
                warn!("[call:{}] {}", self.stats.calls, error);
                self.stats.inconsistencies += 1;
                vec![self.no_good_cut(&blocked)]
            }
        };

        if cuts.is_empty() {
            self.stats.accepted += 1;
            debug!(
                "[call:{}] Oracle accepted candidate ({}).",
                self.stats.calls,
                log_mask(&blocked)
            );
        } else {
            debug!(
                "[call:{}] Oracle rejected candidate ({}) with {} cuts.",
                self.stats.calls,
                log_mask(&blocked),
                cuts.len()
            );
        }

        self.stats.oracle_time += start.elapsed();
        cuts
    }
}
