//! Explicit decycling sets that do not need a solver.
//!
//! [`mykkeltveit_set`] places every vertex in the complex plane by weighting its digits with
//! the `k`-th roots of unity. A rotation moves a vertex along a circle around the origin, so
//! every PCR class crosses the negative real axis at most once per turn; the set picks the
//! crossing vertex of every class (or the smallest vertex of classes that sit in the origin).
//! The result has exactly one vertex per PCR class and leaves an acyclic graph, which gives an
//! upper bound for the unbounded-path variant of the problem.


use crate::graph::{DeBruijnGraph, Vertex};
use log::info;
use std::f64::consts::PI;

const EPSILON: f64 = 1e-10;

#[derive(Clone, Copy, PartialEq, Debug, Default)]
struct Point {
    re: f64,
    im: f64,
}

impl Point {
    fn norm(&self) -> f64 {
        self.re.hypot(self.im)
    }
}

/// The `k`-th roots of unity, with components snapped to zero and exact conjugate pairs.
#[derive(Clone, Debug)]
pub struct RootsOfUnity {
    graph: DeBruijnGraph,
    values: Vec<Point>,
}

impl RootsOfUnity {
    pub fn new(graph: DeBruijnGraph) -> RootsOfUnity {
        let k = graph.order();
        let mut values = vec![Point::default(); k];
        for i in 0..=(k / 2) {
            let theta = 2.0 * PI * (i as f64) / (k as f64);
            let snap = |x: f64| if x.abs() < EPSILON { 0.0 } else { x };
            let value = Point {
                re: snap(theta.cos()),
                im: snap(theta.sin()),
            };
            values[i % k] = value;
            if i > 0 && i < k - i {
                values[k - i] = Point {
                    re: value.re,
                    im: -value.im,
                };
            }
        }
        RootsOfUnity { graph, values }
    }

    /// `Σ_i d_i · ω^((k - i) mod k)`, where `d_i` is the `i`-th digit counted from the
    /// least significant one.
    fn embed(&self, vertex: Vertex) -> Point {
        let k = self.graph.order();
        let base = self.graph.base();
        let mut position = Point::default();
        let mut rest = vertex;
        for i in 0..k {
            let digit = (rest % base) as f64;
            rest /= base;
            let root = self.values[(k - i) % k];
            position.re += digit * root.re;
            position.im += digit * root.im;
        }
        position
    }

    /// Whether `vertex` is the representative of its PCR class.
    pub fn is_selected(&self, vertex: Vertex) -> bool {
        let position = self.embed(vertex);
        if position.norm() < EPSILON {
            // The whole class sits in the origin; pick its smallest vertex.
            let mut next = self.graph.rotate(vertex);
            while next != vertex {
                if next < vertex {
                    return false;
                }
                next = self.graph.rotate(next);
            }
            return true;
        }

        if position.re < -EPSILON && position.im.abs() < EPSILON {
            return true;
        }

        let next = self.embed(self.graph.rotate(vertex));
        position.im < -EPSILON && next.im > EPSILON
    }
}

/// The Mykkeltveit decycling set of `graph`, in increasing order.
///
/// For order 1 every vertex is a self-loop and the whole vertex set is returned.
pub fn mykkeltveit_set(graph: &DeBruijnGraph) -> Vec<Vertex> {
    if graph.order() == 1 {
        return graph.vertices().collect();
    }
    let roots = RootsOfUnity::new(*graph);
    let set: Vec<Vertex> = graph.vertices().filter(|v| roots.is_selected(*v)).collect();
    info!(
        "Mykkeltveit set of ({}, {}) has {} vertices.",
        graph.base(),
        graph.order(),
        set.len()
    );
    set
}
