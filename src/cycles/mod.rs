//! Enumeration of short simple cycles of a De Bruijn graph.
//!
//! [`BoundedCycles`] lazily enumerates every simple cycle with at most `length_bound`
//! vertices. Each cycle is reported exactly once, rotated so that it starts in its smallest
//! vertex: the search started from vertex `s` only ever visits vertices greater than `s`.
//!
//! The cycles are turned into "hits-at-least-one" constraints by [`cycle_constraints`]. These
//! constraints are implied by the walk circuit, but they tighten the relaxation considerably.

mod bounded_search;
mod cycle_config;

#[cfg(test)]
mod tests;

use crate::graph::Vertex;
use crate::model::{LinearConstraint, LinearExpr, VarId};
pub use bounded_search::{BoundedCycleState, BoundedCycleStep};
use cancel_this::Cancellable;
use computation_process::{Generator, Stateful};
pub use cycle_config::CycleConfig;

/// Lazily enumerates the simple cycles described by a [`CycleConfig`].
pub type BoundedCycles = Generator<CycleConfig, BoundedCycleState, Vec<Vertex>, BoundedCycleStep>;

/// The constraint `Σ_{v ∈ cycle} DS[v] >= 1`.
pub fn hitting_constraint(cycle: &[Vertex], ds: &[VarId]) -> LinearConstraint {
    LinearExpr::sum(cycle.iter().map(|v| ds[*v])).at_least(1.0)
}

/// One hitting constraint per simple cycle of at most `config.length_bound` vertices.
pub fn cycle_constraints(
    config: CycleConfig,
    ds: &[VarId],
) -> impl Iterator<Item = Cancellable<LinearConstraint>> + '_ {
    let initial = BoundedCycleState::from(&config);
    BoundedCycles::configure(config, initial)
        .map(move |cycle| cycle.map(|cycle| hitting_constraint(&cycle, ds)))
}
