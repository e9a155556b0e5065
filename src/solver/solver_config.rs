use std::time::Duration;

/// A "flat" configuration object for [`GoodLpSolver`](crate::solver::GoodLpSolver).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Stop re-solving once this much wall-clock time has passed (default: no limit).
    ///
    /// The budget is checked between rounds, so a single round may run past it.
    pub time_limit: Option<Duration>,
    /// Stop after this many solve rounds over all objectives (default: `usize::MAX`).
    pub max_rounds: usize,
    /// A finished objective is pinned to its optimum plus this slack (default: `1e-6`).
    pub pin_tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            time_limit: None,
            max_rounds: usize::MAX,
            pin_tolerance: 1e-6,
        }
    }
}

impl SolverConfig {
    /// Default configuration with the given wall-clock budget.
    pub fn with_time_limit(time_limit: Duration) -> SolverConfig {
        SolverConfig {
            time_limit: Some(time_limit),
            ..SolverConfig::default()
        }
    }
}
