//! A [`MipSolver`] backed by `good_lp` and its pure-Rust `microlp` solver.
//!
//! `microlp` has no callback interface, so lazy constraints are emulated by row generation:
//! solve, pass the optimum to the [`LazyConstraints`] callback, add the returned cuts and solve
//! again until the callback accepts the candidate. Because cuts only ever remove candidates,
//! the first accepted optimum is optimal for the full model.
//!
//! Other model features are translated as follows:
//!
//! - Indicator constraints become big-M rows ([`linearize_indicator`]).
//! - Objectives are minimized one by one in priority order. Each finished objective is
//!   pinned to its optimum before the next one is minimized.
//! - SOS2 sets are branching hints only; `microlp` does not take them and they are skipped.

mod linearize;
mod solver_config;


use crate::error::DecyclingError;
use crate::model::{
    Incumbent, LazyConstraints, LinearConstraint, LinearExpr, MipSolver, Model, Sense, Solution,
    SolveStatus, VarKind,
};
use cancel_this::is_cancelled;
pub use linearize::linearize_indicator;
use log::{debug, info};
pub use solver_config::SolverConfig;
use std::time::Instant;

use good_lp::{
    Expression, ProblemVariables, ResolutionError, Solution as _, SolverModel, Variable,
    default_solver, variable,
};

/// Row-generation adapter over `good_lp` with the `microlp` backend.
#[derive(Clone, Debug, Default)]
pub struct GoodLpSolver {
    pub config: SolverConfig,
}

impl From<SolverConfig> for GoodLpSolver {
    fn from(value: SolverConfig) -> Self {
        GoodLpSolver { config: value }
    }
}

impl GoodLpSolver {
    pub fn new(config: SolverConfig) -> GoodLpSolver {
        GoodLpSolver { config }
    }

    fn out_of_budget(&self, start: Instant, rounds: usize) -> bool {
        rounds >= self.config.max_rounds
            || self
                .config
                .time_limit
                .is_some_and(|limit| start.elapsed() >= limit)
    }
}

impl MipSolver for GoodLpSolver {
    fn optimize(
        &mut self,
        model: &Model,
        lazy: &mut dyn LazyConstraints,
    ) -> Result<Solution, DecyclingError> {
        let start = Instant::now();

        let mut rows: Vec<LinearConstraint> = model.constraints().to_vec();
        for indicator in model.indicators() {
            rows.extend(linearize_indicator(model, indicator));
        }
        if !model.ordered_sets().is_empty() {
            debug!(
                "Skipping {} SOS2 branching hints (not supported by microlp).",
                model.ordered_sets().len()
            );
        }
        info!(
            "Solving model with {} variables and {} rows.",
            model.variables().len(),
            rows.len()
        );

        let mut goals: Vec<(String, LinearExpr)> = model
            .objectives()
            .into_iter()
            .map(|it| (it.name.clone(), it.expression.clone()))
            .collect();
        if goals.is_empty() {
            goals.push(("feasibility".to_string(), LinearExpr::new()));
        }

        let mut rounds = 0;
        let mut lazy_cuts = 0;
        let mut objective_values = Vec::new();
        let mut accepted: Option<Vec<f64>> = None;
        for (name, objective) in goals {
            let values = loop {
                is_cancelled!()?;
                if self.out_of_budget(start, rounds) {
                    info!("Solver budget exhausted after {} rounds.", rounds);
                    return match accepted {
                        Some(values) => Ok(Solution {
                            status: SolveStatus::Interrupted,
                            assignment: Incumbent::new(values),
                            objective_values,
                            lazy_cuts,
                        }),
                        None => Err(DecyclingError::Interrupted),
                    };
                }
                rounds += 1;

                let values = solve_rows(model, &objective, &rows)?;
                let cuts = lazy.separate(&Incumbent::new(values.clone()));
                if cuts.is_empty() {
                    break values;
                }
                debug!(
                    "[round:{}] Objective `{}` candidate rejected with {} cuts.",
                    rounds,
                    name,
                    cuts.len()
                );
                lazy_cuts += cuts.len();
                rows.extend(cuts);
            };

            let value = objective.evaluate(|var| values[var.index()]);
            info!(
                "Objective `{}` settled at {} (rounds={}; lazy cuts={}).",
                name, value, rounds, lazy_cuts
            );
            rows.push(
                objective
                    .at_most(value + self.config.pin_tolerance)
                    .named(format!("pin[{}]", name)),
            );
            objective_values.push(value);
            accepted = Some(values);
        }

        let values = accepted.ok_or(DecyclingError::Interrupted)?;
        Ok(Solution {
            status: SolveStatus::Optimal,
            assignment: Incumbent::new(values),
            objective_values,
            lazy_cuts,
        })
    }
}

/// Solve one round: minimize `objective` subject to `rows`. Binary values are rounded.
fn solve_rows(
    model: &Model,
    objective: &LinearExpr,
    rows: &[LinearConstraint],
) -> Result<Vec<f64>, DecyclingError> {
    let mut problem = ProblemVariables::new();
    let handles: Vec<Variable> = model
        .variables()
        .iter()
        .map(|var| match var.kind {
            VarKind::Binary => problem.add(variable().binary()),
            VarKind::Continuous { lower, upper } => problem.add(variable().min(lower).max(upper)),
        })
        .collect();

    let mut lp = problem
        .minimise(to_expression(objective, &handles))
        .using(default_solver);
    for row in rows {
        let lhs = to_expression(&row.expression, &handles);
        let constraint = match row.sense {
            Sense::AtLeast => lhs.geq(row.rhs),
            Sense::AtMost => lhs.leq(row.rhs),
            Sense::Equal => lhs.eq(row.rhs),
        };
        lp.add_constraint(constraint);
    }

    let solution = lp.solve().map_err(|e| match e {
        ResolutionError::Infeasible => DecyclingError::InfeasibleModel,
        other => DecyclingError::Solver(other.to_string()),
    })?;

    Ok(model
        .variables()
        .iter()
        .zip(&handles)
        .map(|(var, handle)| {
            let value = solution.value(*handle);
            match var.kind {
                VarKind::Binary => value.round(),
                VarKind::Continuous { .. } => value,
            }
        })
        .collect())
}

fn to_expression(expression: &LinearExpr, handles: &[Variable]) -> Expression {
    let mut result = Expression::default();
    for (var, coefficient) in expression.terms() {
        result += *coefficient * handles[var.index()];
    }
    result += expression.constant();
    result
}
