use crate::graph::{DeBruijnGraph, Vertex};
use crate::simple_type_name;
use crate::symmetry::OrbitAction;
use computation_process::Incomplete::Suspended;
use computation_process::{Completable, GeneratorStep};
use log::{debug, trace};
use std::marker::PhantomData;

/// Rotate the k-mer left by one symbol (PCR).
pub struct Rotation;

/// Rotate left by one symbol and complement the symbol moving to the back (PCCR).
pub struct RotationComplement;

impl OrbitAction for Rotation {
    fn apply(graph: &DeBruijnGraph, vertex: Vertex) -> Vertex {
        graph.rotate(vertex)
    }
}

impl OrbitAction for RotationComplement {
    fn apply(graph: &DeBruijnGraph, vertex: Vertex) -> Vertex {
        graph.rotate_complement(vertex)
    }
}

/// Internal state of an orbit enumeration: the next candidate vertex and
/// the vertices already assigned to an orbit.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrbitState {
    next: Vertex,
    visited: Vec<bool>,
}

impl From<&DeBruijnGraph> for OrbitState {
    fn from(value: &DeBruijnGraph) -> Self {
        OrbitState {
            next: 0,
            visited: vec![false; value.vertex_count()],
        }
    }
}

/// A [`GeneratorStep`] which yields one orbit of the [`OrbitAction`] per step, skipping
/// vertices that already belong to a reported orbit.
pub struct OrbitStep<A: OrbitAction>(PhantomData<A>);

impl<A: OrbitAction> GeneratorStep<DeBruijnGraph, OrbitState, Vec<Vertex>> for OrbitStep<A> {
    fn step(context: &DeBruijnGraph, state: &mut OrbitState) -> Completable<Option<Vec<Vertex>>> {
        if state.next >= context.vertex_count() {
            debug!(
                "Orbits<{}> finished for ({}, {}).",
                simple_type_name::<A>(),
                context.base(),
                context.order()
            );
            return Ok(None);
        }

        let start = state.next;
        state.next += 1;
        if state.visited[start] {
            return Err(Suspended);
        }

        let mut orbit = vec![start];
        state.visited[start] = true;
        let mut current = A::apply(context, start);
        while current != start {
            state.visited[current] = true;
            orbit.push(current);
            current = A::apply(context, current);
        }

        trace!(
            "Orbits<{}> found class of size {} at {}.",
            simple_type_name::<A>(),
            orbit.len(),
            context.encode(start)
        );
        Ok(Some(orbit))
    }
}
