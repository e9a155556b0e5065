//! Minimum decycling sets of De Bruijn graphs with a bound on the longest remaining path.
//!
//! The problem is encoded as a mixed-integer program ([`model::Model`]) and solved by an
//! external solver ([`model::MipSolver`]) which calls back into a lazy-constraint oracle
//! ([`oracle::DecyclingOracle`]) for every candidate integer solution.
//!
//! # Example
//!
//! ```no_run
//! use debruijn_decycling::decycling::{DecyclingConfig, DecyclingModel};
//! use debruijn_decycling::solver::GoodLpSolver;
//!
//! let config = DecyclingConfig::new(2, 3, 2);
//! let model = DecyclingModel::build(config).unwrap();
//! let solution = model.solve(&mut GoodLpSolver::default()).unwrap();
//! println!("{} vertices selected", solution.blocked.len());
//! ```

#[cfg(test)]
mod test_utils;

pub mod construction;
pub mod cycles;
pub mod decycling;
pub mod error;
pub mod graph;
pub mod model;
pub mod oracle;
pub mod reachability;
pub mod solver;
pub mod symmetry;

/// A utility method for printing useful metadata of vertex masks.
fn log_mask(mask: &[bool]) -> String {
    format!(
        "elements={}; vertices={}",
        mask.iter().filter(|it| **it).count(),
        mask.len()
    )
}

/// Extract the "simple name" of a type argument at compile time.
///
/// In the future, this should be a `const fn`, but `type_name` and `unwrap_or` are not
/// yet stabilized as `const` functions (even thought they probably are).
fn simple_type_name<T>() -> &'static str {
    std::any::type_name::<T>().split("::").last().unwrap_or("?")
}
