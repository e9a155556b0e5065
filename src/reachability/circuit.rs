use crate::graph::DeBruijnGraph;
use crate::model::{LinearConstraint, LinearExpr, Model, VarId};
use log::info;

/// Binary variables `P[t][v]` of the forward walk circuit, `t = 0..=T`.
///
/// Row 0 marks the unblocked vertices. For `t >= 1`, the indicator constraints force
/// `P[t][v] = 1` whenever `v` and one of its in-neighbors are both marked in row `t - 1`.
/// A walk of `t` edges ending in `v` always contains one of `t - 1` edges ending in `v`, so every
/// feasible assignment over-approximates the set of ends of unblocked walks with `t` edges.
/// Requiring row `T` to be empty ([`WalkCircuit::nilpotence`]) thus bounds every remaining
/// walk by `T - 1` edges.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkCircuit {
    unblocked: Vec<VarId>,
    history: Vec<Vec<VarId>>,
}

impl WalkCircuit {
    /// Add the circuit of the given `horizon` (`T >= 1`) to `model`. `blocked` holds one
    /// binary variable per vertex.
    ///
    /// # Panics
    ///
    /// Panics if `blocked` does not have one variable per vertex or if `horizon` is zero.
    pub fn build(
        model: &mut Model,
        graph: &DeBruijnGraph,
        blocked: &[VarId],
        horizon: usize,
    ) -> WalkCircuit {
        let n = graph.vertex_count();
        assert_eq!(blocked.len(), n, "One blocked variable per vertex");
        assert!(horizon >= 1, "The walk circuit needs at least one row");
        info!(
            "Building walk circuit with horizon {} over {} vertices.",
            horizon, n
        );

        let unblocked = model.add_binaries("P[0]", n);
        for v in graph.vertices() {
            model.add_constraint(
                LinearExpr::sum([unblocked[v], blocked[v]])
                    .equal_to(1.0)
                    .named(format!("unblocked[{}]", v)),
            );
        }

        let history: Vec<Vec<VarId>> = (1..=horizon)
            .map(|t| model.add_binaries(&format!("P[{}]", t), n))
            .collect();

        let base = graph.base() as f64;
        let mut previous = &unblocked;
        for row in &history {
            for v in graph.vertices() {
                let incoming = LinearExpr::sum(graph.predecessors(v).map(|u| previous[u]));
                let propagation = LinearExpr::new()
                    .term(row[v], base)
                    .add_scaled(&incoming, -1.0)
                    .at_least(0.0);
                model.add_indicator(previous[v], true, propagation);
            }
            previous = row;
        }

        WalkCircuit { unblocked, history }
    }

    /// Row 0: `P[0][v] = 1 - blocked[v]`.
    pub fn unblocked(&self) -> &[VarId] {
        &self.unblocked
    }

    /// Rows `1..=T`.
    pub fn history(&self) -> &[Vec<VarId>] {
        &self.history
    }

    pub fn horizon(&self) -> usize {
        self.history.len()
    }

    /// Row `t`, where row 0 is [`WalkCircuit::unblocked`].
    pub fn row(&self, t: usize) -> &[VarId] {
        if t == 0 {
            &self.unblocked
        } else {
            &self.history[t - 1]
        }
    }

    /// `Σ_v P[T][v] = 0`: no remaining walk has `T` edges.
    pub fn nilpotence(&self) -> LinearConstraint {
        LinearExpr::sum(self.row(self.horizon()).iter().copied())
            .equal_to(0.0)
            .named("nilpotence")
    }
}
