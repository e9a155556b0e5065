//! Assembly of the complete decycling program.
//!
//! [`DecyclingModel::build`] composes the `DS` variables, the walk circuit of
//! [`reachability`](crate::reachability) with its nilpotence row, the short cycle constraints of
//! [`cycles`](crate::cycles) and one hitting constraint per PCR class into a single
//! [`Model`](crate::model::Model). [`DecyclingModel::solve`] then runs any
//! [`MipSolver`](crate::model::MipSolver) with a [`DecyclingOracle`](crate::oracle::DecyclingOracle)
//! in its callback slot.
//!
//! Unpartitioned and partitioned solves are two separate modes with different objectives,
//! see [`DecyclingModel::build`].

mod decycling_config;
mod decycling_model;
mod decycling_solution;

#[cfg(test)]
mod tests;

pub use decycling_config::{DecyclingConfig, PartitionSource};
pub use decycling_model::DecyclingModel;
pub use decycling_solution::DecyclingSolution;
