use crate::cycles::{CycleConfig, cycle_constraints};
use crate::decycling::{DecyclingConfig, DecyclingSolution, PartitionSource};
use crate::error::DecyclingError;
use crate::graph::{DeBruijnGraph, remaining_path_length};
use crate::model::{LinearConstraint, LinearExpr, MipSolver, Model, VarId};
use crate::oracle::DecyclingOracle;
use crate::reachability::WalkCircuit;
use crate::symmetry::{Partition, rotation_classes};
use cancel_this::Cancellable;
use log::{debug, info};

/// The assembled decycling program together with the handles needed to read a solution.
#[derive(Clone, Debug)]
pub struct DecyclingModel {
    graph: DeBruijnGraph,
    bound: usize,
    model: Model,
    ds: Vec<VarId>,
    circuit: WalkCircuit,
    partition: Option<(Partition, Vec<VarId>)>,
}

impl DecyclingModel {
    /// Validate `config` and build the model.
    ///
    /// Without a partition, the model minimizes `Σ DS` and carries SOS2 hints over
    /// consecutive triples of every PCR class. With a partition, every class gets a selector
    /// `p` with `DS[v] = p[class(v)]`; `Σ p` is minimized first and `Σ DS` breaks ties.
    pub fn build(config: DecyclingConfig) -> Result<DecyclingModel, DecyclingError> {
        let graph = DeBruijnGraph::new(config.base, config.order)?;
        let partition = match &config.partition {
            None => None,
            Some(PartitionSource::Labels(labels)) => {
                Some(Partition::from_labels(labels, graph.vertex_count())?)
            }
            Some(PartitionSource::Classes(classes)) => Some(Partition::from_classes(
                classes.iter().cloned(),
                graph.vertex_count(),
            )?),
            Some(PartitionSource::ReverseComplement) => {
                Some(Partition::reverse_complement(&graph))
            }
        };

        // An acyclic remainder has no walk with `N` edges, so longer horizons add nothing.
        let horizon = config.bound.saturating_add(1).min(graph.vertex_count());
        info!(
            "Building decycling model for ({}, {}) with path bound {} (horizon {}).",
            graph.base(),
            graph.order(),
            config.bound,
            horizon
        );

        let mut model = Model::new();
        let ds = model.add_binaries("DS", graph.vertex_count());
        let circuit = WalkCircuit::build(&mut model, &graph, &ds, horizon);
        model.add_constraint(circuit.nilpotence());

        let cycles = cycle_constraints(CycleConfig::new(graph, config.cycle_bound()), &ds)
            .collect::<Cancellable<Vec<LinearConstraint>>>()?;
        debug!(
            "Added {} cycle constraints (cycle bound {}).",
            cycles.len(),
            config.cycle_bound()
        );
        for (i, cycle) in cycles.into_iter().enumerate() {
            model.add_constraint(cycle.named(format!("cycle[{}]", i)));
        }

        let pcr = rotation_classes(&graph)?;
        for (i, class) in pcr.iter().enumerate() {
            model.add_constraint(
                LinearExpr::sum(class.iter().map(|v| ds[*v]))
                    .at_least(1.0)
                    .named(format!("pcr[{}]", i)),
            );
        }

        let blocked_count = LinearExpr::sum(ds.iter().copied());
        let partition = match partition {
            None => {
                // Classes are orbits, so triples wrap around the end of the class.
                for class in pcr.iter().filter(|it| it.len() > 2) {
                    let nc = class.len();
                    for i in 0..nc {
                        let members = (0..3).map(|j| ds[class[(i + j) % nc]]).collect();
                        model.add_sos2(members, vec![1.0, 2.0, 3.0]);
                    }
                }
                model.add_objective("blocked", 0, blocked_count);
                None
            }
            Some(partition) => {
                let selectors = model.add_binaries("p", partition.len());
                for v in graph.vertices() {
                    model.add_constraint(
                        LinearExpr::sum([ds[v]])
                            .term(selectors[partition.class_of(v)], -1.0)
                            .equal_to(0.0)
                            .named(format!("class[{}]", v)),
                    );
                }
                model.add_objective("classes", 1, LinearExpr::sum(selectors.iter().copied()));
                model.add_objective("blocked", 0, blocked_count);
                info!("Solving over {} symmetry classes.", partition.len());
                Some((partition, selectors))
            }
        };

        Ok(DecyclingModel {
            graph,
            bound: config.bound,
            model,
            ds,
            circuit,
            partition,
        })
    }

    pub fn graph(&self) -> &DeBruijnGraph {
        &self.graph
    }

    pub fn bound(&self) -> usize {
        self.bound
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// The `DS[v]` variables; `DS[v] = 1` blocks `v`.
    pub fn ds(&self) -> &[VarId] {
        &self.ds
    }

    pub fn circuit(&self) -> &WalkCircuit {
        &self.circuit
    }

    pub fn partition(&self) -> Option<&Partition> {
        self.partition.as_ref().map(|(partition, _)| partition)
    }

    /// Solve the model with `solver`, using a fresh [`DecyclingOracle`] as the lazy-constraint
    /// callback.
    pub fn solve<S: MipSolver + ?Sized>(
        &self,
        solver: &mut S,
    ) -> Result<DecyclingSolution, DecyclingError> {
        let mut oracle = DecyclingOracle::new(self.graph, self.bound, self.ds.clone());
        let solution = solver.optimize(&self.model, &mut oracle)?;

        let mask = oracle.blocked_mask(&solution.assignment);
        let blocked = self.graph.vertices().filter(|v| mask[*v]).collect();
        let selected_classes = self.partition.as_ref().map(|(_, selectors)| {
            selectors
                .iter()
                .filter(|p| solution.assignment.is_set(**p))
                .count()
        });
        let longest_remaining_path = remaining_path_length(&self.graph, &mask);
        let oracle = oracle.into_stats();
        info!(
            "Solve finished with status {:?}; oracle: {}.",
            solution.status, oracle
        );

        Ok(DecyclingSolution {
            graph: self.graph,
            blocked,
            selected_classes,
            status: solution.status,
            oracle,
            lazy_cuts: solution.lazy_cuts,
            longest_remaining_path,
        })
    }
}
