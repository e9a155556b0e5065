use crate::graph::{DeBruijnGraph, Vertex};
use log::trace;

/// A view of a [`DeBruijnGraph`] restricted to vertices that are not blocked.
///
/// The view does not copy the graph: neighbor queries are the algebraic maps of the full
/// graph filtered through the `blocked` mask.
#[derive(Clone, Copy, Debug)]
pub struct InducedSubgraph<'a> {
    graph: &'a DeBruijnGraph,
    blocked: &'a [bool],
}

/// Result of repeatedly removing vertices without remaining predecessors (Kahn's algorithm).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Peeling {
    /// Removed vertices in topological order.
    pub order: Vec<Vertex>,
    /// Unblocked vertices that could not be removed. These lie on a cycle or downstream of one,
    /// and every one of them has a predecessor that is also residual.
    pub residual: Vec<bool>,
}

impl Peeling {
    /// True if the peeled subgraph is acyclic.
    pub fn is_acyclic(&self) -> bool {
        !self.residual.iter().any(|it| *it)
    }
}

impl<'a> InducedSubgraph<'a> {
    /// # Panics
    ///
    /// Panics if `blocked` does not have one entry per graph vertex.
    pub fn new(graph: &'a DeBruijnGraph, blocked: &'a [bool]) -> InducedSubgraph<'a> {
        assert_eq!(
            blocked.len(),
            graph.vertex_count(),
            "Blocked mask does not match the vertex count"
        );
        InducedSubgraph { graph, blocked }
    }

    pub fn graph(&self) -> &DeBruijnGraph {
        self.graph
    }

    pub fn contains(&self, vertex: Vertex) -> bool {
        !self.blocked[vertex]
    }

    /// Unblocked vertices in increasing order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.graph.vertices().filter(|v| self.contains(*v))
    }

    pub fn successors(&self, vertex: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        self.graph
            .successors(vertex)
            .filter(|v| self.contains(*v))
    }

    pub fn predecessors(&self, vertex: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        self.graph
            .predecessors(vertex)
            .filter(|v| self.contains(*v))
    }

    /// Topologically peel the subgraph.
    pub fn peel(&self) -> Peeling {
        let mut in_degree = vec![0usize; self.graph.vertex_count()];
        let mut stack = Vec::new();
        for v in self.vertices() {
            in_degree[v] = self.predecessors(v).count();
            if in_degree[v] == 0 {
                stack.push(v);
            }
        }

        let mut order = Vec::new();
        while let Some(v) = stack.pop() {
            order.push(v);
            for w in self.successors(v) {
                in_degree[w] -= 1;
                if in_degree[w] == 0 {
                    stack.push(w);
                }
            }
        }

        let residual = in_degree.into_iter().map(|it| it > 0).collect();
        Peeling { order, residual }
    }

    /// Extract up to `limit` vertex-disjoint simple cycles from the residual part of `peeling`.
    ///
    /// Each cycle is listed in edge order and rotated so that its smallest vertex comes first.
    /// Returns `None` if a residual vertex has no residual predecessor, which means `peeling`
    /// does not belong to this subgraph.
    pub fn extract_cycles(&self, peeling: &Peeling, limit: usize) -> Option<Vec<Vec<Vertex>>> {
        const UNSEEN: usize = usize::MAX;
        let residual = &peeling.residual;
        let mut owner = vec![UNSEEN; residual.len()];
        let mut position = vec![0usize; residual.len()];
        let mut cycles = Vec::new();

        for (walk, start) in (0..residual.len()).filter(|v| residual[*v]).enumerate() {
            if cycles.len() >= limit {
                break;
            }
            if owner[start] != UNSEEN {
                continue;
            }

            // Follow residual predecessors until we return to this walk (new cycle)
            // or reach a vertex explored by an earlier walk (nothing new).
            let mut path = Vec::new();
            let mut current = start;
            loop {
                if owner[current] == walk {
                    let mut cycle: Vec<Vertex> = path[position[current]..].to_vec();
                    cycle.reverse();
                    canonical_rotation(&mut cycle);
                    trace!("Extracted residual cycle {:?}.", cycle);
                    cycles.push(cycle);
                    break;
                }
                if owner[current] != UNSEEN {
                    break;
                }
                owner[current] = walk;
                position[current] = path.len();
                path.push(current);
                current = self.predecessors(current).find(|u| residual[*u])?;
            }
        }

        Some(cycles)
    }

    /// A longest directed path (as a vertex sequence) of an acyclic subgraph.
    ///
    /// Returns `None` if `peeling` is not acyclic.
    pub fn longest_path(&self, peeling: &Peeling) -> Option<Vec<Vertex>> {
        if !peeling.is_acyclic() {
            return None;
        }

        let mut length = vec![0usize; self.graph.vertex_count()];
        let mut parent: Vec<Option<Vertex>> = vec![None; self.graph.vertex_count()];
        let mut end: Option<Vertex> = None;
        for &v in &peeling.order {
            length[v] = 1;
            for u in self.predecessors(v) {
                if length[u] + 1 > length[v] {
                    length[v] = length[u] + 1;
                    parent[v] = Some(u);
                }
            }
            if end.is_none_or(|e| length[v] > length[e]) {
                end = Some(v);
            }
        }

        let mut path = Vec::new();
        let mut current = end;
        while let Some(v) = current {
            path.push(v);
            current = parent[v];
        }
        path.reverse();
        Some(path)
    }
}

/// Rotate a cycle so that its minimum vertex is first.
pub(crate) fn canonical_rotation(cycle: &mut [Vertex]) {
    if let Some((index, _)) = cycle.iter().enumerate().min_by_key(|(_, v)| **v) {
        cycle.rotate_left(index);
    }
}

/// The number of edges on the longest path remaining after removing `blocked` vertices,
/// or `None` if the remaining graph still contains a cycle.
pub fn remaining_path_length(graph: &DeBruijnGraph, blocked: &[bool]) -> Option<usize> {
    let induced = InducedSubgraph::new(graph, blocked);
    let peeling = induced.peel();
    let path = induced.longest_path(&peeling)?;
    Some(path.len().saturating_sub(1))
}
