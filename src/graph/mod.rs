//! Algebraic representation of De Bruijn graphs.
//!
//! A vertex of the order-`k` De Bruijn graph over an alphabet of size `b` is an integer
//! in `[0, b^k)`. Its base-`b` digits (most significant first) form the k-mer represented by
//! the vertex. There is an edge `x -> y` iff `y` is `x` without its leading digit, extended by
//! one trailing digit. Edges are never materialized: [`DeBruijnGraph::successors`] and
//! [`DeBruijnGraph::predecessors`] compute them arithmetically.
//!
//! # Example
//!
//! ```
//! use debruijn_decycling::graph::DeBruijnGraph;
//!
//! let graph = DeBruijnGraph::new(2, 3).unwrap();
//! let v = graph.decode("011").unwrap();
//! assert_eq!(v, 3);
//! let next: Vec<_> = graph.successors(v).map(|it| graph.encode(it)).collect();
//! assert_eq!(next, vec!["110", "111"]);
//! ```

use crate::error::DecyclingError;

#[cfg(test)]
mod tests;

mod induced;

pub use induced::{InducedSubgraph, Peeling, remaining_path_length};

/// Vertices are plain indices into `[0, b^k)`.
pub type Vertex = usize;

/// The largest supported alphabet; k-mers use the digits `0-9a-z`.
pub const MAX_BASE: usize = 36;

/// The De Bruijn graph of base `b` and order `k`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeBruijnGraph {
    base: usize,
    order: usize,
    size: usize,
    /// `b^(k-1)`, the weight of the leading digit.
    leading: usize,
}

impl DeBruijnGraph {
    /// Create the graph of the given `base` (alphabet size) and `order` (k-mer length).
    ///
    /// Fails with [`DecyclingError::InvalidParameters`] when `base` is not in `[2, 36]`,
    /// `order` is zero, or `base^(order + 1)` does not fit into `usize`.
    pub fn new(base: usize, order: usize) -> Result<DeBruijnGraph, DecyclingError> {
        if !(2..=MAX_BASE).contains(&base) {
            return Err(DecyclingError::InvalidParameters(format!(
                "base must be in [2, {}], got {}",
                MAX_BASE, base
            )));
        }
        if order == 0 {
            return Err(DecyclingError::InvalidParameters(
                "order must be at least 1".to_string(),
            ));
        }
        let exponent = u32::try_from(order + 1).ok();
        let Some(size) = exponent
            .and_then(|e| base.checked_pow(e))
            .map(|overflow| overflow / base)
        else {
            return Err(DecyclingError::InvalidParameters(format!(
                "graph of base {} and order {} is too large",
                base, order
            )));
        };

        Ok(DeBruijnGraph {
            base,
            order,
            size,
            leading: size / base,
        })
    }

    /// Alphabet size `b`.
    pub fn base(&self) -> usize {
        self.base
    }

    /// k-mer length `k`.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of vertices, `b^k`.
    pub fn vertex_count(&self) -> usize {
        self.size
    }

    /// Iterate over all vertices in increasing order.
    pub fn vertices(&self) -> std::ops::Range<Vertex> {
        0..self.size
    }

    /// The `b` successors of `vertex`, in digit order of the appended symbol.
    pub fn successors(&self, vertex: Vertex) -> impl Iterator<Item = Vertex> + use<> {
        let first = (vertex * self.base) % self.size;
        (0..self.base).map(move |digit| first + digit)
    }

    /// The successor of `vertex` obtained by appending `digit`.
    pub fn successor(&self, vertex: Vertex, digit: usize) -> Vertex {
        (vertex * self.base) % self.size + digit
    }

    /// The `b` predecessors of `vertex`, in digit order of the prepended symbol.
    pub fn predecessors(&self, vertex: Vertex) -> impl Iterator<Item = Vertex> + use<> {
        let first = vertex / self.base;
        let leading = self.leading;
        (0..self.base).map(move |digit| first + digit * leading)
    }

    /// The leading (most significant) digit of `vertex`.
    pub fn leading_digit(&self, vertex: Vertex) -> usize {
        vertex / self.leading
    }

    /// Rotate the k-mer of `vertex` left by one symbol. This is always an edge of the graph.
    pub fn rotate(&self, vertex: Vertex) -> Vertex {
        (vertex * self.base) % self.size + self.leading_digit(vertex)
    }

    /// Rotate left by one symbol and complement the symbol that moves from the front
    /// to the back (`d -> b - 1 - d`).
    pub fn rotate_complement(&self, vertex: Vertex) -> Vertex {
        (vertex * self.base) % self.size + (self.base - 1 - self.leading_digit(vertex))
    }

    /// The digits of `vertex`, most significant first.
    pub fn digits(&self, vertex: Vertex) -> Vec<usize> {
        let mut digits = vec![0; self.order];
        let mut rest = vertex;
        for slot in digits.iter_mut().rev() {
            *slot = rest % self.base;
            rest /= self.base;
        }
        digits
    }

    /// Inverse of [`DeBruijnGraph::digits`]. Digits are not validated.
    pub fn from_digits(&self, digits: impl IntoIterator<Item = usize>) -> Vertex {
        digits
            .into_iter()
            .fold(0, |vertex, digit| vertex * self.base + digit)
    }

    /// Format `vertex` as its k-mer string (`0-9a-z` digits, most significant first).
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a vertex of this graph.
    pub fn encode(&self, vertex: Vertex) -> String {
        assert!(
            vertex < self.size,
            "Vertex {} out of range for {} vertices",
            vertex,
            self.size
        );
        self.digits(vertex)
            .into_iter()
            .filter_map(|digit| char::from_digit(digit as u32, self.base as u32))
            .collect()
    }

    /// Parse a k-mer string back into its vertex.
    pub fn decode(&self, kmer: &str) -> Result<Vertex, DecyclingError> {
        let found = kmer.chars().count();
        if found != self.order {
            return Err(DecyclingError::LengthMismatch {
                expected: self.order,
                found,
            });
        }

        let mut vertex = 0;
        for (position, symbol) in kmer.chars().enumerate() {
            let Some(digit) = symbol.to_digit(self.base as u32) else {
                return Err(DecyclingError::InvalidSymbol {
                    symbol,
                    position,
                    base: self.base,
                });
            };
            vertex = vertex * self.base + digit as usize;
        }
        Ok(vertex)
    }
}
