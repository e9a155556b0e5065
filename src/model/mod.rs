//! A solver-agnostic mixed-integer model together with the traits used to talk to a solver.
//!
//! The model only records *what* is to be solved: variables, linear constraints, indicator
//! constraints, SOS2 branching hints and prioritized objectives. A [`MipSolver`] consumes the
//! model and calls a [`LazyConstraints`] callback for every integer-feasible candidate it finds;
//! the callback answers with zero or more cuts over existing variables.

mod expression;


use crate::error::DecyclingError;
pub use expression::{LinearConstraint, LinearExpr, Sense};

/// Handle of a model variable.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VarId(usize);

impl VarId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VarKind {
    Binary,
    Continuous { lower: f64, upper: f64 },
}

impl VarKind {
    /// Lower and upper bound of the variable domain.
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            VarKind::Binary => (0.0, 1.0),
            VarKind::Continuous { lower, upper } => (*lower, *upper),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variable {
    pub name: String,
    pub kind: VarKind,
}

/// A constraint that must hold only when `control` takes the value `active_when`.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndicatorConstraint {
    pub control: VarId,
    pub active_when: bool,
    pub constraint: LinearConstraint,
}

/// A type-2 special ordered set: at most two consecutive members may be nonzero.
///
/// The model records these as branching hints. Backends may use them to order branching
/// decisions, but the decycling model never relies on them for feasibility.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderedSet {
    pub members: Vec<VarId>,
    pub weights: Vec<f64>,
}

/// A minimized objective. Objectives with higher `priority` are optimized first; later ones
/// only break ties.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Objective {
    pub name: String,
    pub priority: i32,
    pub expression: LinearExpr,
}

/// The mixed-integer program handed over to a [`MipSolver`].
#[derive(Clone, Default, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Model {
    variables: Vec<Variable>,
    constraints: Vec<LinearConstraint>,
    indicators: Vec<IndicatorConstraint>,
    ordered_sets: Vec<OrderedSet>,
    objectives: Vec<Objective>,
}

impl Model {
    pub fn new() -> Model {
        Model::default()
    }

    pub fn add_binary(&mut self, name: impl Into<String>) -> VarId {
        self.add_variable(name, VarKind::Binary)
    }

    /// Add `count` binary variables named `{prefix}[i]`.
    pub fn add_binaries(&mut self, prefix: &str, count: usize) -> Vec<VarId> {
        (0..count)
            .map(|i| self.add_binary(format!("{}[{}]", prefix, i)))
            .collect()
    }

    pub fn add_continuous(&mut self, name: impl Into<String>, lower: f64, upper: f64) -> VarId {
        self.add_variable(name, VarKind::Continuous { lower, upper })
    }

    fn add_variable(&mut self, name: impl Into<String>, kind: VarKind) -> VarId {
        self.variables.push(Variable {
            name: name.into(),
            kind,
        });
        VarId(self.variables.len() - 1)
    }

    pub fn add_constraint(&mut self, constraint: LinearConstraint) {
        self.constraints.push(constraint);
    }

    /// Require `constraint` whenever `control == active_when`.
    pub fn add_indicator(&mut self, control: VarId, active_when: bool, constraint: LinearConstraint) {
        self.indicators.push(IndicatorConstraint {
            control,
            active_when,
            constraint,
        });
    }

    /// Add an SOS2 branching hint. `members` and `weights` must have equal length.
    pub fn add_sos2(&mut self, members: Vec<VarId>, weights: Vec<f64>) {
        assert_eq!(members.len(), weights.len(), "Every SOS member needs a weight");
        self.ordered_sets.push(OrderedSet { members, weights });
    }

    /// Add a minimized objective with the given priority.
    pub fn add_objective(&mut self, name: impl Into<String>, priority: i32, expression: LinearExpr) {
        self.objectives.push(Objective {
            name: name.into(),
            priority,
            expression,
        });
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variable(&self, id: VarId) -> &Variable {
        &self.variables[id.0]
    }

    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }

    pub fn indicators(&self) -> &[IndicatorConstraint] {
        &self.indicators
    }

    pub fn ordered_sets(&self) -> &[OrderedSet] {
        &self.ordered_sets
    }

    /// Objectives sorted by decreasing priority (the solve order).
    pub fn objectives(&self) -> Vec<&Objective> {
        let mut objectives: Vec<&Objective> = self.objectives.iter().collect();
        objectives.sort_by_key(|it| std::cmp::Reverse(it.priority));
        objectives
    }

    /// The smallest and largest value `expression` can take within variable bounds.
    pub fn expression_range(&self, expression: &LinearExpr) -> (f64, f64) {
        let mut low = expression.constant();
        let mut high = expression.constant();
        for (var, coefficient) in expression.terms() {
            let (lower, upper) = self.variable(*var).kind.bounds();
            if *coefficient >= 0.0 {
                low += coefficient * lower;
                high += coefficient * upper;
            } else {
                low += coefficient * upper;
                high += coefficient * lower;
            }
        }
        (low, high)
    }
}

/// Variable values of an integer-feasible candidate solution.
#[derive(Clone, PartialEq, Debug)]
pub struct Incumbent {
    values: Vec<f64>,
}

impl Incumbent {
    pub fn new(values: Vec<f64>) -> Incumbent {
        Incumbent { values }
    }

    pub fn value(&self, var: VarId) -> f64 {
        self.values[var.0]
    }

    /// Interpret a binary variable.
    pub fn is_set(&self, var: VarId) -> bool {
        self.value(var) > 0.5
    }

    pub fn evaluate(&self, expression: &LinearExpr) -> f64 {
        expression.evaluate(|var| self.value(var))
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Whether the returned solution is proven optimal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolveStatus {
    Optimal,
    /// The best accepted candidate when the solve was stopped early. Not a proof of minimality.
    Interrupted,
}

/// The final assignment returned by a [`MipSolver`].
#[derive(Clone, PartialEq, Debug)]
pub struct Solution {
    pub status: SolveStatus,
    pub assignment: Incumbent,
    /// Objective values in solve order (see [`Model::objectives`]).
    pub objective_values: Vec<f64>,
    /// Number of lazy cuts that were added during the solve.
    pub lazy_cuts: usize,
}

/// A callback invoked once per integer-feasible candidate. Returning no cuts accepts the
/// candidate; returned cuts must exclude it and stay valid for the rest of the solve.
pub trait LazyConstraints {
    fn separate(&mut self, incumbent: &Incumbent) -> Vec<LinearConstraint>;
}

impl<F: FnMut(&Incumbent) -> Vec<LinearConstraint>> LazyConstraints for F {
    fn separate(&mut self, incumbent: &Incumbent) -> Vec<LinearConstraint> {
        self(incumbent)
    }
}

/// A callback that accepts every candidate.
pub struct NoLazyConstraints;

impl LazyConstraints for NoLazyConstraints {
    fn separate(&mut self, _incumbent: &Incumbent) -> Vec<LinearConstraint> {
        Vec::new()
    }
}

/// An external MIP solver.
pub trait MipSolver {
    /// Minimize the objectives of `model` in priority order, calling `lazy` on every
    /// integer-feasible candidate.
    ///
    /// Fails with [`DecyclingError::InfeasibleModel`] when no feasible assignment exists.
    fn optimize(
        &mut self,
        model: &Model,
        lazy: &mut dyn LazyConstraints,
    ) -> Result<Solution, DecyclingError>;
}
