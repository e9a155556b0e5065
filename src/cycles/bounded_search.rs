use crate::cycles::CycleConfig;
use crate::graph::Vertex;
use computation_process::Incomplete::Suspended;
use computation_process::{Completable, GeneratorStep};
use log::{debug, trace};

/// Internal state of the bounded cycle search: the current start vertex and the depth-first
/// stack of the simple path explored from it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundedCycleState {
    start: Vertex,
    /// Path vertices together with the next successor digit to try.
    stack: Vec<(Vertex, usize)>,
    on_path: Vec<bool>,
    reported: usize,
}

impl From<&CycleConfig> for BoundedCycleState {
    fn from(value: &CycleConfig) -> Self {
        BoundedCycleState {
            start: 0,
            stack: Vec::new(),
            on_path: vec![false; value.graph.vertex_count()],
            reported: 0,
        }
    }
}

/// A [`GeneratorStep`] which performs one depth-first move per step and yields a cycle
/// whenever the explored path can be closed back to its start vertex.
pub struct BoundedCycleStep;

impl GeneratorStep<CycleConfig, BoundedCycleState, Vec<Vertex>> for BoundedCycleStep {
    fn step(
        context: &CycleConfig,
        state: &mut BoundedCycleState,
    ) -> Completable<Option<Vec<Vertex>>> {
        let graph = &context.graph;

        let Some(&(vertex, digit)) = state.stack.last() else {
            // Pick the next allowed start vertex.
            while state.start < graph.vertex_count() && !context.is_allowed(state.start) {
                state.start += 1;
            }
            if state.start >= graph.vertex_count() || context.length_bound == 0 {
                debug!(
                    "BoundedCycles finished with {} cycles of length <= {}.",
                    state.reported, context.length_bound
                );
                return Ok(None);
            }
            trace!("BoundedCycles searching from {}.", graph.encode(state.start));
            state.stack.push((state.start, 0));
            state.on_path[state.start] = true;
            return Err(Suspended);
        };

        if digit >= graph.base() {
            state.stack.pop();
            state.on_path[vertex] = false;
            if state.stack.is_empty() {
                state.start += 1;
            }
            return Err(Suspended);
        }

        if let Some(top) = state.stack.last_mut() {
            top.1 += 1;
        }

        let next = graph.successor(vertex, digit);
        if next == state.start {
            let cycle: Vec<Vertex> = state.stack.iter().map(|(v, _)| *v).collect();
            state.reported += 1;
            trace!("BoundedCycles found cycle of length {}.", cycle.len());
            return Ok(Some(cycle));
        }

        if next > state.start
            && context.is_allowed(next)
            && !state.on_path[next]
            && state.stack.len() < context.length_bound
        {
            state.stack.push((next, 0));
            state.on_path[next] = true;
        }

        Err(Suspended)
    }
}
