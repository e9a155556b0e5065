use crate::graph::{DeBruijnGraph, Vertex};

/// String symmetries of k-mers expressed as vertex maps.
#[derive(Clone, Copy, Debug)]
pub struct Complementer {
    graph: DeBruijnGraph,
}

impl From<&DeBruijnGraph> for Complementer {
    fn from(value: &DeBruijnGraph) -> Self {
        Complementer { graph: *value }
    }
}

impl Complementer {
    pub fn new(graph: DeBruijnGraph) -> Complementer {
        Complementer { graph }
    }

    /// Reverse the k-mer of `vertex`.
    pub fn reverse(&self, vertex: Vertex) -> Vertex {
        self.graph
            .from_digits(self.graph.digits(vertex).into_iter().rev())
    }

    /// Replace every digit `d` with `b - 1 - d`.
    ///
    /// In positional notation, this is exactly `b^k - 1 - vertex`.
    pub fn complement(&self, vertex: Vertex) -> Vertex {
        self.graph.vertex_count() - 1 - vertex
    }

    /// Reverse and complement the k-mer of `vertex`.
    pub fn reverse_complement(&self, vertex: Vertex) -> Vertex {
        self.complement(self.reverse(vertex))
    }

    /// The smaller of `vertex` and its reverse complement.
    pub fn canonical(&self, vertex: Vertex) -> Vertex {
        vertex.min(self.reverse_complement(vertex))
    }
}
